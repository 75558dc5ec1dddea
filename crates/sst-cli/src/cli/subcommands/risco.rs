use clap::Subcommand;
use sst_core::ResourceId;

/// Risk inventory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RiscoCommands {
    /// List the risks of a PGR.
    List { pgr_id: ResourceId },
    /// Remove a risk from a PGR.
    Delete { pgr_id: ResourceId, risco_id: ResourceId },
}
