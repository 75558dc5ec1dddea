use std::path::PathBuf;

use clap::{Args, Subcommand};
use sst_core::{ResourceId, Sort};
use sst_core::enums::PgrStatus;

/// PGR document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PgrCommands {
    /// List PGRs, one page at a time.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<PgrStatus>,
        /// Page to show, starting at 1.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Sort as `field,asc|desc`.
        #[arg(long)]
        sort: Option<Sort>,
    },
    /// Get a PGR by ID.
    Get { id: ResourceId },
    /// Create a PGR from a JSON file.
    Create {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        files: PgrFileArgs,
    },
    /// Replace a PGR with the contents of a JSON file.
    Update {
        id: ResourceId,
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        files: PgrFileArgs,
    },
    /// Move a PGR to another lifecycle status.
    Status { id: ResourceId, status: PgrStatus },
    /// Delete a PGR.
    Delete { id: ResourceId },
    /// Download the PGR report (PDF).
    Report {
        id: ResourceId,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Filter the PGR list interactively: one search per line read from stdin.
    Browse {
        #[arg(long)]
        status: Option<PgrStatus>,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct PgrFileArgs {
    /// Cover document.
    #[arg(long)]
    pub capa: Option<PathBuf>,
    /// Cover image.
    #[arg(long)]
    pub imagem_capa: Option<PathBuf>,
}
