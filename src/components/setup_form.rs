//! Setup form component
//!
//! Selectable field list over the migration configuration and pricing
//! table. Fields are edited through the input dialog; the environment field
//! cycles in place and the disk layout opens in the external editor.

use crate::action::Action;
use crate::component::Component;
use crate::model::domain::DomainState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Editable fields of the setup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    ClientName,
    OsVersion,
    SqlVersion,
    Environment,
    DiskLayout,
    Collation,
    MemoryNote,
    CpuNote,
    DbaHourCost,
    IaasVcoreHour,
    IaasStorageMonth,
    PaasVcoreHour,
    PaasStorageMonth,
    PaasHaMultiplier,
    SaasPerGb,
}

/// Index of the first pricing field in `SetupField::all`
const PRICING_SECTION_START: usize = 9;

impl SetupField {
    pub fn all() -> [SetupField; 15] {
        [
            SetupField::ClientName,
            SetupField::OsVersion,
            SetupField::SqlVersion,
            SetupField::Environment,
            SetupField::DiskLayout,
            SetupField::Collation,
            SetupField::MemoryNote,
            SetupField::CpuNote,
            SetupField::DbaHourCost,
            SetupField::IaasVcoreHour,
            SetupField::IaasStorageMonth,
            SetupField::PaasVcoreHour,
            SetupField::PaasStorageMonth,
            SetupField::PaasHaMultiplier,
            SetupField::SaasPerGb,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetupField::ClientName => "Client name",
            SetupField::OsVersion => "OS version",
            SetupField::SqlVersion => "SQL Server version",
            SetupField::Environment => "Environment",
            SetupField::DiskLayout => "Disk layout",
            SetupField::Collation => "Instance collation",
            SetupField::MemoryNote => "Instance memory",
            SetupField::CpuNote => "Instance CPUs",
            SetupField::DbaHourCost => "DBA hourly rate",
            SetupField::IaasVcoreHour => "IaaS vCore $/h",
            SetupField::IaasStorageMonth => "IaaS storage $/GB-mo",
            SetupField::PaasVcoreHour => "PaaS vCore $/h",
            SetupField::PaasStorageMonth => "PaaS storage $/GB-mo",
            SetupField::PaasHaMultiplier => "PaaS HA multiplier",
            SetupField::SaasPerGb => "SaaS $/GB-mo",
        }
    }

    /// Whether committed input must parse as a number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SetupField::DbaHourCost
                | SetupField::IaasVcoreHour
                | SetupField::IaasStorageMonth
                | SetupField::PaasVcoreHour
                | SetupField::PaasStorageMonth
                | SetupField::PaasHaMultiplier
                | SetupField::SaasPerGb
        )
    }

    /// Current value rendered for the field list (and as edit pre-fill)
    pub fn value(&self, domain: &DomainState) -> String {
        match self {
            SetupField::ClientName => domain.config.client_name.clone(),
            SetupField::OsVersion => domain.config.os_version.clone(),
            SetupField::SqlVersion => domain.config.sql_version.clone(),
            SetupField::Environment => domain.config.environment.label().to_string(),
            SetupField::DiskLayout => disk_layout_preview(&domain.config.disk_layout),
            SetupField::Collation => domain.config.collation.clone(),
            SetupField::MemoryNote => domain.config.memory_note.clone(),
            SetupField::CpuNote => domain.config.cpu_note.clone(),
            SetupField::DbaHourCost => format!("{:.2}", domain.config.dba_hour_cost),
            SetupField::IaasVcoreHour => format_rate(domain.pricing.iaas_vcore_hour),
            SetupField::IaasStorageMonth => format_rate(domain.pricing.iaas_storage_month),
            SetupField::PaasVcoreHour => format_rate(domain.pricing.paas_vcore_hour),
            SetupField::PaasStorageMonth => format_rate(domain.pricing.paas_storage_month),
            SetupField::PaasHaMultiplier => format_rate(domain.pricing.paas_ha_multiplier),
            SetupField::SaasPerGb => format_rate(domain.pricing.saas_per_gb),
        }
    }

    /// Commit an edited value.
    ///
    /// Numeric fields reject input that does not parse; the caller keeps the
    /// old value and surfaces the error. The caller recomputes afterwards.
    pub fn apply(&self, domain: &mut DomainState, input: &str) -> std::result::Result<(), String> {
        let text = input.trim();

        if self.is_numeric() {
            let number: f64 = text
                .parse()
                .map_err(|_| format!("{}: not a number: {:?}", self.label(), text))?;
            match self {
                SetupField::DbaHourCost => domain.config.dba_hour_cost = number,
                SetupField::IaasVcoreHour => domain.pricing.iaas_vcore_hour = number,
                SetupField::IaasStorageMonth => domain.pricing.iaas_storage_month = number,
                SetupField::PaasVcoreHour => domain.pricing.paas_vcore_hour = number,
                SetupField::PaasStorageMonth => domain.pricing.paas_storage_month = number,
                SetupField::PaasHaMultiplier => domain.pricing.paas_ha_multiplier = number,
                SetupField::SaasPerGb => domain.pricing.saas_per_gb = number,
                _ => {}
            }
            return Ok(());
        }

        match self {
            SetupField::ClientName => {
                domain.config.client_name = text.to_string();
                // Team slots in the checklist name the client
                domain.reseed_activities();
            }
            SetupField::OsVersion => domain.config.os_version = text.to_string(),
            SetupField::SqlVersion => domain.config.sql_version = text.to_string(),
            SetupField::Collation => domain.config.collation = text.to_string(),
            SetupField::MemoryNote => domain.config.memory_note = text.to_string(),
            SetupField::CpuNote => domain.config.cpu_note = text.to_string(),
            // Environment cycles in place; disk layout goes through $EDITOR
            SetupField::Environment | SetupField::DiskLayout => {}
            _ => {}
        }
        Ok(())
    }
}

fn format_rate(rate: f64) -> String {
    rate.to_string()
}

fn disk_layout_preview(layout: &str) -> String {
    let mut lines = layout.lines().filter(|l| !l.trim().is_empty());
    let first = lines.next().unwrap_or("").to_string();
    match lines.count() {
        0 => first,
        more => format!("{} (+{} more)", first, more),
    }
}

/// Setup form component
#[derive(Default)]
pub struct SetupForm {
    pub selected: usize,
}

impl SetupForm {
    /// Field currently under the cursor
    pub fn selected_field(&self) -> SetupField {
        let fields = SetupField::all();
        fields[self.selected.min(fields.len() - 1)]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % SetupField::all().len();
    }

    pub fn previous(&mut self) {
        let len = SetupField::all().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = SetupField::all().len() - 1;
    }

    /// Render the two-column field list.
    pub fn render(&self, frame: &mut Frame, area: Rect, domain: &DomainState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let fields = SetupField::all();
        let server_lines = self.field_lines(domain, &fields[..PRICING_SECTION_START], 0);
        let pricing_lines =
            self.field_lines(domain, &fields[PRICING_SECTION_START..], PRICING_SECTION_START);

        let server = Paragraph::new(server_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Server Configuration ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(server, columns[0]);

        let pricing = Paragraph::new(pricing_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pricing ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(pricing, columns[1]);
    }

    fn field_lines(
        &self,
        domain: &DomainState,
        fields: &[SetupField],
        index_offset: usize,
    ) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        for (offset, field) in fields.iter().enumerate() {
            let is_selected = index_offset + offset == self.selected;
            let marker = if is_selected { "› " } else { "  " };
            let label_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let value_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{}{:22}", marker, field.label()), label_style),
                Span::styled(field.value(domain), value_style),
            ]));
        }

        lines
    }
}

impl Component for SetupForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Char('g') => {
                self.first();
                None
            }
            KeyCode::Char('G') => {
                self.last();
                None
            }
            KeyCode::Enter => match self.selected_field() {
                SetupField::Environment => Some(Action::CycleEnvironment),
                SetupField::DiskLayout => Some(Action::EditDiskLayout),
                _ => Some(Action::EditSelectedField),
            },
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
    fn test_field_order_starts_with_client_and_ends_with_saas() {
        let fields = SetupField::all();
        assert_eq!(fields[0], SetupField::ClientName);
        assert_eq!(fields[PRICING_SECTION_START], SetupField::IaasVcoreHour);
        assert_eq!(fields[fields.len() - 1], SetupField::SaasPerGb);
    }

    #[test]
    fn test_numeric_apply_rejects_garbage() {
        let mut domain = DomainState::new();
        let before = domain.config.dba_hour_cost;

        let result = SetupField::DbaHourCost.apply(&mut domain, "cheap");
        assert!(result.is_err());
        assert_eq!(domain.config.dba_hour_cost, before);

        SetupField::DbaHourCost.apply(&mut domain, " 150.5 ").unwrap();
        assert_eq!(domain.config.dba_hour_cost, 150.5);
    }

    #[test]
    fn test_client_name_apply_reseeds_checklist_teams() {
        let mut domain = DomainState::new();
        SetupField::ClientName.apply(&mut domain, "AcmeCorp").unwrap();
        assert!(domain.activities.iter().any(|a| a.team == "AcmeCorp"));
    }

    #[test]
    fn test_selection_wraps() {
        let mut form = SetupForm::default();
        form.last();
        form.next();
        assert_eq!(form.selected, 0);
        form.previous();
        assert_eq!(form.selected_field(), SetupField::SaasPerGb);
    }

    #[test]
    fn test_disk_layout_preview_counts_extra_lines() {
        assert_eq!(disk_layout_preview("(C:) OS - 50 GB"), "(C:) OS - 50 GB");
        assert_eq!(
            disk_layout_preview("(C:) OS - 50 GB\n(D:) Data - 20 GB"),
            "(C:) OS - 50 GB (+1 more)"
        );
    }
}
