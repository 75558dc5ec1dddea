use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sst` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sst",
    version,
    about = "SST admin - occupational health and safety back office from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config files and SST_API__BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use sst_core::ResourceId;
    use sst_core::enums::PgrStatus;

    use super::root_commands::LookupKind;
    use super::subcommands::{CatCommands, PgrCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sst", "--format", "json", "--verbose", "config"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sst", "config", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sst", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn base_url_flag_reaches_global_flags() {
        let cli = Cli::try_parse_from(["sst", "--base-url", "https://sst.example.com/api", "config"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("https://sst.example.com/api"));
    }

    #[test]
    fn search_parses_kind_term_and_options() {
        let cli = Cli::try_parse_from([
            "sst", "search", "medico", "cardio", "--page", "2", "--select", "1",
        ])
        .expect("cli should parse");

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.kind, LookupKind::Medico);
        assert_eq!(args.term.as_deref(), Some("cardio"));
        assert_eq!(args.page, 2);
        assert_eq!(args.select, Some(1));
    }

    #[test]
    fn search_rejects_page_zero() {
        assert!(Cli::try_parse_from(["sst", "search", "cid", "--page", "0"]).is_err());
    }

    #[test]
    fn pgr_status_parses_wire_values_case_insensitively() {
        let cli = Cli::try_parse_from(["sst", "pgr", "status", "42", "vigente"])
            .expect("cli should parse");

        let Commands::Pgr {
            action: PgrCommands::Status { id, status },
        } = cli.command
        else {
            panic!("expected pgr status");
        };
        assert_eq!(id, ResourceId::from(42));
        assert_eq!(status, PgrStatus::Vigente);
    }

    #[test]
    fn pgr_status_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["sst", "pgr", "status", "42", "aprovado"]).is_err());
    }

    #[test]
    fn cat_create_collects_repeated_attachments() {
        let cli = Cli::try_parse_from([
            "sst", "cat", "create", "--file", "cat.json", "--anexo", "a.pdf", "--anexo", "b.jpg",
        ])
        .expect("cli should parse");

        let Commands::Cat {
            action: CatCommands::Create { files, .. },
        } = cli.command
        else {
            panic!("expected cat create");
        };
        assert_eq!(files.anexos.len(), 2);
        assert!(files.atestado.is_none());
    }
}
