//! Activity checklist table component
//!
//! Editable list of migration activities: add, duplicate, delete, reorder,
//! and per-row edits for description, team, status, and time estimate.

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

/// Activity checklist table
#[derive(Default)]
pub struct ActivityTable {
    pub selected: usize,
    last_len: usize,
}

impl ActivityTable {
    /// Row cursor clamped to the current checklist
    pub fn selected_row(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        }
    }

    /// Render the checklist with a progress footer.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, domain: &DomainState) {
        self.last_len = domain.activities.len();
        self.selected = self.selected_row(self.last_len);

        let mut lines: Vec<Line> = if domain.activities.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No activities - press 'a' to add one or 'r' to load the template",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else {
            let rows: Vec<Vec<String>> = domain
                .activities
                .iter()
                .enumerate()
                .map(|(index, a)| {
                    vec![
                        (index + 1).to_string(),
                        a.description.clone(),
                        a.team.clone(),
                        a.status.clone(),
                        a.time_estimate.clone(),
                    ]
                })
                .collect();

            build_table_lines(
                &["#", "Activity", "Team", "Status", "Time"],
                &rows,
                Some(self.selected),
            )
        };

        if !domain.activities.is_empty() {
            let done = domain.activities.iter().filter(|a| a.is_done()).count();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "Total time: {} · {}/{} done",
                    domain.summary.total_activity_time,
                    done,
                    domain.activities.len(),
                ),
                Style::default().fg(Color::Yellow),
            )));
        }

        let visible_height = area.height.saturating_sub(2) as usize;
        let scroll = (self.selected + 2).saturating_sub(visible_height.max(1));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Migration Activities ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((scroll as u16, 0));

        frame.render_widget(paragraph, area);
    }
}

impl Component for ActivityTable {
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
            KeyCode::Char('a') => Some(Action::AddActivity),
            KeyCode::Char('D') => Some(Action::DuplicateActivity),
            KeyCode::Char('x') => Some(Action::RemoveActivity),
            KeyCode::Char('J') => Some(Action::MoveActivityDown),
            KeyCode::Char('K') => Some(Action::MoveActivityUp),
            KeyCode::Enter => Some(Action::EditActivityDescription),
            KeyCode::Char('t') => Some(Action::EditActivityTime),
            KeyCode::Char('m') => Some(Action::CycleActivityTeam),
            KeyCode::Char('s') => Some(Action::CycleActivityStatus),
            KeyCode::Char('r') => Some(Action::ReseedActivities),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through `render`, which takes the domain state
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_row_clamps_to_list() {
        let table = ActivityTable {
            selected: 99,
            last_len: 0,
        };
        assert_eq!(table.selected_row(5), 4);
        assert_eq!(table.selected_row(0), 0);
    }
}
