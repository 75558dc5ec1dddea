mod browse;
mod status;

use std::path::Path;

use serde_json::json;
use sst_client::PgrFiles;
use sst_client::pgr::PgrFilter;
use sst_core::entities::Pgr;
use sst_core::enums::PgrStatus;
use sst_core::{ResourceId, Sort};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PgrCommands, PgrFileArgs};
use crate::commands::shared::files::{optional_attachment, read_payload, write_report};
use crate::commands::shared::paging::{listing_page, page_request};
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

/// Handle `sst pgr`.
pub async fn handle(action: &PgrCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PgrCommands::List {
            search,
            status,
            page,
            sort,
        } => list(search.as_deref(), *status, *page, sort.clone(), ctx, flags).await,
        PgrCommands::Get { id } => {
            let pgr = with_spinner("Carregando PGR...", ctx.client.get_pgr(id)).await?;
            output(&pgr, flags.format)
        }
        PgrCommands::Create { file, files } => {
            let pgr: Pgr = read_payload(file)?;
            let files = pgr_files(files).await?;
            let created = with_spinner("Salvando PGR...", ctx.client.create_pgr(&pgr, files)).await?;
            output(&created, flags.format)
        }
        PgrCommands::Update { id, file, files } => {
            let pgr: Pgr = read_payload(file)?;
            let files = pgr_files(files).await?;
            let updated =
                with_spinner("Salvando PGR...", ctx.client.update_pgr(id, &pgr, files)).await?;
            output(&updated, flags.format)
        }
        PgrCommands::Status { id, status } => status::run(id, *status, ctx, flags).await,
        PgrCommands::Delete { id } => {
            with_spinner("Excluindo PGR...", ctx.client.delete_pgr(id)).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        PgrCommands::Report { id, output: target } => {
            report(id, target.as_deref(), ctx, flags).await
        }
        PgrCommands::Browse { status } => browse::run(*status, ctx, flags).await,
    }
}

async fn list(
    search: Option<&str>,
    status: Option<PgrStatus>,
    page: u32,
    sort: Option<Sort>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut request = page_request(page, ctx.page_size());
    request.sort = sort;
    let filter = PgrFilter {
        search: search.map(str::to_string),
        status,
        page: request.clone(),
    };
    let envelope = with_spinner("Carregando PGRs...", ctx.client.list_pgrs(&filter)).await?;
    output_page(&listing_page(envelope, &request), flags.format)
}

async fn report(
    id: &ResourceId,
    target: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let bytes = with_spinner("Gerando relatório...", ctx.client.pgr_report(id)).await?;
    let path = write_report(&bytes, target, &format!("pgr-{id}.pdf"))?;
    output(
        &json!({ "report": path.display().to_string(), "bytes": bytes.len() }),
        flags.format,
    )
}

async fn pgr_files(args: &PgrFileArgs) -> anyhow::Result<PgrFiles> {
    Ok(PgrFiles {
        capa: optional_attachment(args.capa.as_deref()).await?,
        imagem_capa: optional_attachment(args.imagem_capa.as_deref()).await?,
    })
}
