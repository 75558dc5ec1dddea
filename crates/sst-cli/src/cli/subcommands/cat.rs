use std::path::PathBuf;

use clap::{Args, Subcommand};
use sst_core::ResourceId;
use sst_core::enums::CatTipo;

/// CAT report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatCommands {
    /// List CATs, one page at a time.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        tipo: Option<CatTipo>,
        /// Page to show, starting at 1.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Get a CAT by ID.
    Get { id: ResourceId },
    /// File a CAT from a JSON file.
    Create {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        files: CatFileArgs,
    },
    /// Replace a CAT with the contents of a JSON file.
    Update {
        id: ResourceId,
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        files: CatFileArgs,
    },
    /// Delete a CAT.
    Delete { id: ResourceId },
    /// Download the CAT report (PDF).
    Report {
        id: ResourceId,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct CatFileArgs {
    /// Medical certificate.
    #[arg(long)]
    pub atestado: Option<PathBuf>,
    /// Supporting document (repeatable).
    #[arg(long = "anexo")]
    pub anexos: Vec<PathBuf>,
}
