use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RiscoCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `sst risco`.
pub async fn handle(action: &RiscoCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RiscoCommands::List { pgr_id } => {
            let riscos = with_spinner("Carregando riscos...", ctx.client.list_riscos(pgr_id)).await?;
            output(&riscos, flags.format)
        }
        RiscoCommands::Delete { pgr_id, risco_id } => {
            with_spinner(
                "Excluindo risco...",
                ctx.client.delete_risco(pgr_id, risco_id),
            )
            .await?;
            output(&json!({ "pgr": pgr_id, "deleted": risco_id }), flags.format)
        }
    }
}
