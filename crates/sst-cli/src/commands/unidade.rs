use crate::cli::GlobalFlags;
use crate::cli::subcommands::UnidadeCommands;
use crate::commands::shared::paging::{listing_page, page_request};
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `sst unidade`.
pub async fn handle(
    action: &UnidadeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UnidadeCommands::List { nome, page } => {
            let request = page_request(*page, ctx.page_size());
            let envelope = with_spinner(
                "Carregando unidades...",
                ctx.client.list_unidades(nome.as_deref(), &request),
            )
            .await?;
            output_page(&listing_page(envelope, &request), flags.format)
        }
        UnidadeCommands::Get { id } => {
            let unidade = with_spinner("Carregando unidade...", ctx.client.get_unidade(id)).await?;
            output(&unidade, flags.format)
        }
        UnidadeCommands::Setores { id } => {
            let setores = with_spinner(
                "Carregando setores...",
                ctx.client.list_setores_by_unidade(id),
            )
            .await?;
            output(&setores, flags.format)
        }
    }
}
