use std::sync::Arc;

use serde::Serialize;
use sst_client::SearchEndpoint;
use sst_core::entities::{AgenteNocivo, Cbo, Cid, Medico, Nr16Anexo, ParteCorpo, SituacaoGeradora};
use sst_core::{Page, SearchItem, Searchable};
use sst_search::{ClientSource, HighlightedRow, Phase, SearchModal, Segment};

use crate::cli::root_commands::{LookupKind, SearchArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
struct LookupResponse<'a> {
    title: &'a str,
    term: Option<&'a str>,
    page: Page<SearchItem>,
}

/// Handle `sst search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.kind {
        LookupKind::Cid => run_lookup::<Cid>(args, ctx, flags).await,
        LookupKind::Cbo => run_lookup::<Cbo>(args, ctx, flags).await,
        LookupKind::Medico => run_lookup::<Medico>(args, ctx, flags).await,
        LookupKind::ParteCorpo => run_lookup::<ParteCorpo>(args, ctx, flags).await,
        LookupKind::SituacaoGeradora => run_lookup::<SituacaoGeradora>(args, ctx, flags).await,
        LookupKind::Nr16 => run_lookup::<Nr16Anexo>(args, ctx, flags).await,
        LookupKind::AgenteNocivo => run_lookup::<AgenteNocivo>(args, ctx, flags).await,
    }
}

async fn run_lookup<T>(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()>
where
    T: SearchEndpoint + Clone,
{
    let source = Arc::new(ClientSource::<T>::new(Arc::clone(&ctx.client)));
    let mut modal = SearchModal::new(source, ctx.page_size());

    // Opening issues the unfiltered request; a term supersedes it right away.
    let opened = modal.open();
    let ticket = match args.term.as_deref() {
        Some(term) => modal.submit(term)?,
        None => opened,
    };

    let progress = Progress::spinner(&format!("Buscando {}...", T::LABEL));
    modal.run(ticket).await;

    if args.page > 1 && matches!(modal.phase(), Phase::Results) {
        let ticket = modal.go_to_page(args.page - 1)?;
        modal.run(ticket).await;
    }
    progress.finish_clear();

    if let Phase::Error { message } = modal.phase() {
        anyhow::bail!("{} lookup failed: {message}", T::LABEL);
    }

    if let Some(row) = args.select {
        let index = usize::try_from(row - 1)?;
        let mut picked = None;
        modal.select(index, |item| picked = Some(item))?;
        return output(&picked, flags.format);
    }

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_modal(&modal, ui::prefs().table_color));
            Ok(())
        }
        format => output(
            &LookupResponse {
                title: modal.title(),
                term: modal.term(),
                page: modal.page().clone().map(|row| row.to_search_item()),
            },
            format,
        ),
    }
}

fn render_modal<T>(modal: &SearchModal<ClientSource<T>>, color: bool) -> String
where
    T: SearchEndpoint + Clone,
{
    let mut lines = Vec::new();
    lines.push(match modal.term() {
        Some(term) => format!("{}: \"{term}\"", modal.title()),
        None => modal.title().to_string(),
    });

    match modal.phase() {
        Phase::Empty => lines.push(String::from("Nenhum resultado encontrado.")),
        Phase::Idle => lines.push(String::from("Nenhum registro cadastrado.")),
        _ => {
            let offset = modal.page().number as usize * modal.page().size as usize;
            lines.extend(
                modal
                    .rows()
                    .iter()
                    .enumerate()
                    .map(|(index, row)| render_row(offset + index + 1, row, color)),
            );
        }
    }

    lines.push(String::new());
    lines.push(modal.pagination_label());
    lines.join("\n")
}

/// One result line: number, code, main label and the secondary label.
fn render_row(number: usize, row: &HighlightedRow, color: bool) -> String {
    let mut line = format!("{number:>3}  ");
    if let Some(code) = &row.code {
        line.push_str(&render_segments(code, color));
        line.push_str("  ");
    }
    line.push_str(&render_segments(&row.primary, color));
    if let Some(secondary) = &row.secondary {
        line.push_str(" (");
        line.push_str(&render_segments(secondary, color));
        line.push(')');
    }
    line
}

fn render_segments(segments: &[Segment], color: bool) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.matched && color {
                format!("\u{1b}[1;4m{}\u{1b}[0m", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sst_core::{ResourceId, SearchItem};
    use sst_search::{HighlightedRow, highlight};

    use super::{render_row, render_segments};

    fn row(term: &str) -> HighlightedRow {
        let item = SearchItem {
            id: ResourceId::from(1),
            primary_label: "Ana Cardoso".to_string(),
            secondary_label: Some("CRM 1234".to_string()),
            code: None,
        };
        HighlightedRow {
            primary: highlight(&item.primary_label, term),
            secondary: item.secondary_label.as_deref().map(|s| highlight(s, term)),
            code: None,
            item,
        }
    }

    #[test]
    fn plain_row_has_no_escape_codes() {
        assert_eq!(render_row(1, &row("card"), false), "  1  Ana Cardoso (CRM 1234)");
    }

    #[test]
    fn colored_row_marks_only_the_match() {
        let rendered = render_segments(&highlight("Ana Cardoso", "card"), true);
        assert_eq!(rendered, "Ana \u{1b}[1;4mCard\u{1b}[0moso");
    }

    #[test]
    fn code_leads_the_line_when_present() {
        let item = SearchItem {
            id: ResourceId::from(9),
            primary_label: "Fratura do fêmur".to_string(),
            secondary_label: None,
            code: Some("S72".to_string()),
        };
        let row = HighlightedRow {
            primary: highlight(&item.primary_label, ""),
            secondary: None,
            code: Some(highlight("S72", "")),
            item,
        };
        assert_eq!(render_row(12, &row, false), " 12  S72  Fratura do fêmur");
    }
}
