use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Pgr { action } => commands::pgr::handle(&action, ctx, flags).await,
        Commands::Cat { action } => commands::cat::handle(&action, ctx, flags).await,
        Commands::Ltip { action } => commands::ltip::handle(&action, ctx, flags).await,
        Commands::Setor { action } => commands::setor::handle(&action, ctx, flags).await,
        Commands::Unidade { action } => commands::unidade::handle(&action, ctx, flags).await,
        Commands::Risco { action } => commands::risco::handle(&action, ctx, flags).await,
        Commands::Config => unreachable!("config is pre-dispatched in main"),
    }
}
