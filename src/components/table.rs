//! Table line rendering shared by the estimate and activity views
//!
//! Builds styled text lines with column alignment and width-aware
//! truncation, for embedding in bordered panels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a single column may grow
const MAX_COLUMN_WIDTH: usize = 48;

/// Build table lines from headers and rows.
///
/// The `highlight` row index is rendered selected-style. Cells wider than
/// the column are truncated with an ellipsis.
pub fn build_table_lines(
    headers: &[&str],
    rows: &[Vec<String>],
    highlight: Option<usize>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Column widths from header and cell content
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.width());
            }
        }
    }
    for width in &mut col_widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            vec![
                Span::styled(
                    pad_cell(h, col_widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = col_widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    for (row_index, row) in rows.iter().enumerate() {
        let selected = highlight == Some(row_index);
        let cell_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let row_spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = col_widths.get(i).copied().unwrap_or(10);
                vec![
                    Span::styled(pad_cell(cell, width), cell_style),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines
}

/// Pad or truncate a cell to an exact display width.
fn pad_cell(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let target = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(ch);
    }
    format!("{}...", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table_lines_has_header_separator_and_rows() {
        let lines = build_table_lines(
            &["#", "Name"],
            &[
                vec!["1".to_string(), "Sales".to_string()],
                vec!["2".to_string(), "CRM".to_string()],
            ],
            None,
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_truncation_respects_column_width() {
        let long = "a".repeat(100);
        let cell = pad_cell(&long, 10);
        assert_eq!(cell.width(), 10);
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn test_padding_fills_short_cells() {
        assert_eq!(pad_cell("ab", 5), "ab   ");
    }
}
