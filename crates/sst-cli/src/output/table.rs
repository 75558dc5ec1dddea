#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
///
/// Widths count characters, not bytes, so accented labels line up.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell.as_str()))
                .max()
                .unwrap_or(0)
                .max(display_len(header))
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_len(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = format_cell(&truncated, *width, numeric);
                if options.color {
                    colorize_status(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_len(headers[*idx]).max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(display_len(value)));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Color `padded` according to the document status spelled in `value`.
fn colorize_status(padded: &str, value: &str) -> String {
    let code = match value.trim().to_uppercase().as_str() {
        "VIGENTE" | "SIM" => Some("32"),
        "RASCUNHO" | "REABERTURA" => Some("33"),
        "VENCIDO" | "COMUNICACAO_OBITO" | "NÃO" => Some("31"),
        "ARQUIVADO" => Some("2"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, colorize_status, render_entity_table, truncate_text};

    #[test]
    fn accented_cells_align_by_characters() {
        let headers = ["nome"];
        let rows = vec![vec!["José".to_string()], vec!["Joao".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "descricao"];
        let rows = vec![vec![
            "1".to_string(),
            "Fratura do colo do fêmur com deslocamento".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate_text("S72", 10), "S72");
        assert_eq!(truncate_text("Lesão", 3), "Le…");
    }

    #[test]
    fn status_colors_wrap_whole_cell() {
        assert_eq!(
            colorize_status("VIGENTE  ", "VIGENTE"),
            "\u{1b}[32mVIGENTE  \u{1b}[0m"
        );
        assert_eq!(colorize_status("outro", "outro"), "outro");
    }
}
