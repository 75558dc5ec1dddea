use std::path::PathBuf;

use clap::Subcommand;
use sst_core::ResourceId;

/// LTIP report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LtipCommands {
    /// List LTIPs, one page at a time.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        unidade: Option<ResourceId>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Get an LTIP by ID.
    Get { id: ResourceId },
    /// Create an LTIP from a JSON file.
    Create {
        #[arg(long)]
        file: PathBuf,
        /// Attachment (repeatable).
        #[arg(long = "anexo")]
        anexos: Vec<PathBuf>,
    },
    /// Delete an LTIP.
    Delete { id: ResourceId },
    /// Download the LTIP report (PDF).
    Report {
        id: ResourceId,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
