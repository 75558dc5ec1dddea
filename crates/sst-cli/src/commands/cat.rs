use serde_json::json;
use sst_client::CatFiles;
use sst_client::cat::CatFilter;
use sst_core::entities::Cat;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CatCommands, CatFileArgs};
use crate::commands::shared::files::{attachments, optional_attachment, read_payload, write_report};
use crate::commands::shared::paging::{listing_page, page_request};
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `sst cat`.
pub async fn handle(action: &CatCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CatCommands::List { search, tipo, page } => {
            let request = page_request(*page, ctx.page_size());
            let filter = CatFilter {
                search: search.clone(),
                tipo: *tipo,
                page: request.clone(),
            };
            let envelope = with_spinner("Carregando CATs...", ctx.client.list_cats(&filter)).await?;
            output_page(&listing_page(envelope, &request), flags.format)
        }
        CatCommands::Get { id } => {
            let cat = with_spinner("Carregando CAT...", ctx.client.get_cat(id)).await?;
            output(&cat, flags.format)
        }
        CatCommands::Create { file, files } => {
            let cat: Cat = read_payload(file)?;
            let files = cat_files(files).await?;
            let created = with_spinner("Emitindo CAT...", ctx.client.create_cat(&cat, files)).await?;
            output(&created, flags.format)
        }
        CatCommands::Update { id, file, files } => {
            let cat: Cat = read_payload(file)?;
            let files = cat_files(files).await?;
            let updated =
                with_spinner("Salvando CAT...", ctx.client.update_cat(id, &cat, files)).await?;
            output(&updated, flags.format)
        }
        CatCommands::Delete { id } => {
            with_spinner("Excluindo CAT...", ctx.client.delete_cat(id)).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        CatCommands::Report { id, output: target } => {
            let bytes = with_spinner("Gerando relatório...", ctx.client.cat_report(id)).await?;
            let path = write_report(&bytes, target.as_deref(), &format!("cat-{id}.pdf"))?;
            output(
                &json!({ "report": path.display().to_string(), "bytes": bytes.len() }),
                flags.format,
            )
        }
    }
}

async fn cat_files(args: &CatFileArgs) -> anyhow::Result<CatFiles> {
    Ok(CatFiles {
        atestado_medico: optional_attachment(args.atestado.as_deref()).await?,
        anexos: attachments(&args.anexos).await?,
    })
}
