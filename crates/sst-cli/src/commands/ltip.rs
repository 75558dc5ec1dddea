use serde_json::json;
use sst_client::LtipFiles;
use sst_client::ltip::LtipFilter;
use sst_core::entities::Ltip;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LtipCommands;
use crate::commands::shared::files::{attachments, read_payload, write_report};
use crate::commands::shared::paging::{listing_page, page_request};
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `sst ltip`.
pub async fn handle(action: &LtipCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LtipCommands::List {
            search,
            unidade,
            page,
        } => {
            let request = page_request(*page, ctx.page_size());
            let filter = LtipFilter {
                search: search.clone(),
                unidade_id: unidade.clone(),
                page: request.clone(),
            };
            let envelope = with_spinner("Carregando LTIPs...", ctx.client.list_ltips(&filter)).await?;
            output_page(&listing_page(envelope, &request), flags.format)
        }
        LtipCommands::Get { id } => {
            let ltip = with_spinner("Carregando LTIP...", ctx.client.get_ltip(id)).await?;
            output(&ltip, flags.format)
        }
        LtipCommands::Create { file, anexos } => {
            let ltip: Ltip = read_payload(file)?;
            let files = LtipFiles {
                anexos: attachments(anexos).await?,
            };
            let created =
                with_spinner("Salvando LTIP...", ctx.client.create_ltip(&ltip, files)).await?;
            output(&created, flags.format)
        }
        LtipCommands::Delete { id } => {
            with_spinner("Excluindo LTIP...", ctx.client.delete_ltip(id)).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        LtipCommands::Report { id, output: target } => {
            let bytes = with_spinner("Gerando relatório...", ctx.client.ltip_report(id)).await?;
            let path = write_report(&bytes, target.as_deref(), &format!("ltip-{id}.pdf"))?;
            output(
                &json!({ "report": path.display().to_string(), "bytes": bytes.len() }),
                flags.format,
            )
        }
    }
}
