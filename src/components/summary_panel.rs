//! Summary panel component
//!
//! Read-only totals across estimates and activities, plus the report
//! export entry point.

use crate::action::Action;
use crate::component::Component;
use crate::model::domain::DomainState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Summary panel
#[derive(Default)]
pub struct SummaryPanel;

impl SummaryPanel {
    /// Render the totals and the export hint.
    pub fn render(&self, frame: &mut Frame, area: Rect, domain: &DomainState) {
        let summary = &domain.summary;
        let done = domain.activities.iter().filter(|a| a.is_done()).count();

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {:26}", label), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Estimate for {}", domain.config.client_name),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            row("Databases", summary.database_count.to_string()),
            row("Total size", format!("{} GB", summary.total_size_gb)),
            row(
                "Migration effort",
                format!("{} hours", summary.total_migration_hours),
            ),
            row(
                "Migration cost",
                format!("{:.2}", summary.total_migration_cost),
            ),
            row(
                format!("Monthly cost ({})", domain.config.environment.label()).as_str(),
                format!("{:.2}", summary.total_monthly_cost),
            ),
            Line::from(""),
            row(
                "Activities",
                format!("{} ({} done)", domain.activities.len(), done),
            ),
            row("Activity time", summary.total_activity_time.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "  Press 'x' to export the report (.md or .json)",
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }
}

impl Component for SummaryPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('x') => Some(Action::ExportReport),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through `render`, which takes the domain state
        Ok(())
    }
}
