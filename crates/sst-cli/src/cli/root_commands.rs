use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    CatCommands, LtipCommands, PgrCommands, RiscoCommands, SetorCommands, UnidadeCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search a lookup table (CID, CBO, médico, ...) and optionally pick a row.
    Search(SearchArgs),
    /// PGR documents.
    Pgr {
        #[command(subcommand)]
        action: PgrCommands,
    },
    /// CAT reports.
    Cat {
        #[command(subcommand)]
        action: CatCommands,
    },
    /// LTIP reports.
    Ltip {
        #[command(subcommand)]
        action: LtipCommands,
    },
    /// Sectors.
    Setor {
        #[command(subcommand)]
        action: SetorCommands,
    },
    /// Business units.
    Unidade {
        #[command(subcommand)]
        action: UnidadeCommands,
    },
    /// Risks inventoried in a PGR.
    Risco {
        #[command(subcommand)]
        action: RiscoCommands,
    },
    /// Show the effective configuration.
    Config,
}

/// Lookup tables reachable through `sst search`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LookupKind {
    Cid,
    Cbo,
    Medico,
    ParteCorpo,
    SituacaoGeradora,
    Nr16,
    AgenteNocivo,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Which lookup table to search.
    #[arg(value_enum)]
    pub kind: LookupKind,
    /// Search text. Omit to list the table from the start.
    pub term: Option<String>,
    /// Page to show, starting at 1.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Pick row N (1-based) of the shown page and print the selection.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub select: Option<u32>,
}
