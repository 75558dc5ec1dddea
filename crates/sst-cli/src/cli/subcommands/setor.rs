use clap::Subcommand;
use sst_core::ResourceId;

/// Sector commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SetorCommands {
    /// List sectors.
    List {
        #[arg(long)]
        nome: Option<String>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Get a sector by ID.
    Get { id: ResourceId },
    /// Delete a sector.
    Delete { id: ResourceId },
}
