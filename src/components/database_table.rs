//! Database estimates table component
//!
//! Shows one row per parsed database with the derived sizing and costs,
//! plus a totals footer. Owns the row cursor and the database-list keys.

use crate::action::Action;
use crate::component::Component;
use crate::components::table::build_table_lines;
use crate::model::domain::DomainState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Database estimates table
#[derive(Default)]
pub struct DatabaseTable {
    pub selected: usize,
    last_len: usize,
}

impl DatabaseTable {
    /// Row cursor clamped to the current estimate list
    pub fn selected_row(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        }
    }

    /// Render the estimates table with a totals footer.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, domain: &DomainState) {
        self.last_len = domain.estimates.len();
        self.selected = self.selected_row(self.last_len);

        let mut lines: Vec<Line> = if domain.estimates.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No databases yet - press 'e' to edit the list or 'i' to import a CSV",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else {
            let rows: Vec<Vec<String>> = domain
                .estimates
                .iter()
                .enumerate()
                .map(|(index, e)| {
                    vec![
                        (index + 1).to_string(),
                        e.name.clone(),
                        e.size_gb.to_string(),
                        e.vcores.to_string(),
                        e.migration_hours.to_string(),
                        format!("{:.2}", e.migration_cost),
                        format!("{:.2}", e.monthly_cost),
                    ]
                })
                .collect();

            build_table_lines(
                &[
                    "#",
                    "Database",
                    "Size (GB)",
                    "vCores",
                    "Hours",
                    "Migration cost",
                    "Monthly cost",
                ],
                &rows,
                Some(self.selected),
            )
        };

        if !domain.estimates.is_empty() {
            let summary = &domain.summary;
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Total: {} databases · {} GB", summary.database_count, summary.total_size_gb),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(
                        " · {} h migration · {:.2} migration cost · {:.2}/month ({})",
                        summary.total_migration_hours,
                        summary.total_migration_cost,
                        summary.total_monthly_cost,
                        domain.config.environment.label(),
                    ),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }

        // Keep the cursor row in view
        let visible_height = area.height.saturating_sub(2) as usize;
        let scroll = (self.selected + 2).saturating_sub(visible_height.max(1));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Database Estimates ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((scroll as u16, 0));

        frame.render_widget(paragraph, area);
    }
}

impl Component for DatabaseTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.last_len {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                None
            }
            KeyCode::Char('G') => {
                self.selected = self.last_len.saturating_sub(1);
                None
            }
            KeyCode::Char('e') => Some(Action::EditDatabaseList),
            KeyCode::Char('a') => Some(Action::AddDatabaseLine),
            KeyCode::Char('d') => Some(Action::RemoveSelectedDatabase),
            KeyCode::Char('i') => Some(Action::ImportCsv),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through `render`, which takes the domain state
        Ok(())
    }
}
