use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SetorCommands;
use crate::commands::shared::paging::{listing_page, page_request};
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `sst setor`.
pub async fn handle(action: &SetorCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SetorCommands::List { nome, page } => {
            let request = page_request(*page, ctx.page_size());
            let envelope = with_spinner(
                "Carregando setores...",
                ctx.client.list_setores(nome.as_deref(), &request),
            )
            .await?;
            output_page(&listing_page(envelope, &request), flags.format)
        }
        SetorCommands::Get { id } => {
            let setor = with_spinner("Carregando setor...", ctx.client.get_setor(id)).await?;
            output(&setor, flags.format)
        }
        SetorCommands::Delete { id } => {
            with_spinner("Excluindo setor...", ctx.client.delete_setor(id)).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
