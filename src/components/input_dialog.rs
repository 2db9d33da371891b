//! Single-line input dialog component
//!
//! One reusable text prompt for field edits, new database lines, and file
//! paths. The purpose recorded at open time tells the App what to do with
//! the committed text.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::components::setup_form::SetupField;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the committed input text will be applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Value for a setup form field
    SetupField(SetupField),
    /// New raw database line
    NewDbLine,
    /// Path of a CSV file to import
    CsvPath,
    /// Path for the exported Markdown report
    ReportPath,
    /// Description of the checklist row at this index
    ActivityDescription(usize),
    /// Time estimate of the checklist row at this index
    ActivityTime(usize),
}

/// Single-line input dialog
pub struct InputDialog {
    pub title: String,
    pub value: String,
    pub purpose: InputPurpose,
}

impl Default for InputDialog {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: String::new(),
            purpose: InputPurpose::NewDbLine,
        }
    }
}

impl InputDialog {
    /// Prepare the dialog for a new prompt.
    pub fn open(&mut self, title: &str, initial: &str, purpose: InputPurpose) {
        self.title = title.to_string();
        self.value = initial.to_string();
        self.purpose = purpose;
    }
}

impl Component for InputDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => Some(Action::SubmitInput(self.value.clone())),
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Backspace => {
                self.value.pop();
                None
            }
            KeyCode::Char(c) => {
                self.value.push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = area.width.saturating_sub(8).clamp(30, 70);
        let popup_area = centered_popup(area, width, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", self.value),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Apply  "),
                Span::styled(
                    " Esc ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.title))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
