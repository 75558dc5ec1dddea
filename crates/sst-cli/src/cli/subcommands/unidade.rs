use clap::Subcommand;
use sst_core::ResourceId;

/// Business unit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UnidadeCommands {
    /// List business units.
    List {
        #[arg(long)]
        nome: Option<String>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Get a business unit by ID.
    Get { id: ResourceId },
    /// List the sectors of a business unit.
    Setores { id: ResourceId },
}
