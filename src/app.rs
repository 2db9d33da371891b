//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components and the
//! domain state but the estimation logic itself lives in the services.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, ActivityTable, DatabaseTable, HelpDialog, HomeRenderContext, InputDialog,
    InputPurpose, QuitDialog, SetupForm, SummaryPanel,
};
use crate::model::activity::{next_status, next_team};
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::Tab;
use crate::services::{parser, report};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::fs;
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// External Editor Sessions
// ═══════════════════════════════════════════════════════════════════════════════

/// Which buffer an external editor session is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTarget {
    DatabaseList,
    DiskLayout,
}

/// A pending $EDITOR session, launched by the main loop between draws
pub struct EditorSession {
    pub path: PathBuf,
    pub target: EditorTarget,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (inputs and derived estimates)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Current active tab
    pub active_tab: Tab,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Pending external editor session (handled by the main loop)
    pub editor_session: Option<EditorSession>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub setup_form: SetupForm,
    pub database_table: DatabaseTable,
    pub activity_table: ActivityTable,
    pub summary_panel: SummaryPanel,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub input_dialog: InputDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            active_tab: Tab::Setup,
            should_quit: false,
            error: None,
            status_message: None,
            editor_session: None,
            setup_form: SetupForm::default(),
            database_table: DatabaseTable::default(),
            activity_table: ActivityTable::default(),
            summary_panel: SummaryPanel,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            input_dialog: InputDialog::default(),
        }
    }

    /// Apply the contents saved by a finished $EDITOR session.
    pub fn editor_closed(&mut self) {
        let session = match self.editor_session.take() {
            Some(s) => s,
            None => return,
        };

        match fs::read_to_string(&session.path) {
            Ok(contents) => {
                let contents = contents.trim_end().to_string();
                match session.target {
                    EditorTarget::DatabaseList => {
                        self.domain.set_db_list(contents);
                        self.status_message = Some(format!(
                            "Database list updated ({} databases)",
                            self.domain.estimates.len()
                        ));
                    }
                    EditorTarget::DiskLayout => {
                        self.domain.config.disk_layout = contents;
                        self.status_message = Some("Disk layout updated".to_string());
                    }
                }
            }
            Err(e) => {
                self.error = Some(format!("Failed to read edited file: {}", e));
            }
        }
    }

    fn start_editor_session(&mut self, target: EditorTarget) {
        let (file_name, contents) = match target {
            EditorTarget::DatabaseList => {
                ("sqlmig-databases.txt", self.domain.db_list_text.clone())
            }
            EditorTarget::DiskLayout => {
                ("sqlmig-disk-layout.txt", self.domain.config.disk_layout.clone())
            }
        };

        let path = std::env::temp_dir().join(file_name);
        match fs::write(&path, contents) {
            Ok(()) => self.editor_session = Some(EditorSession { path, target }),
            Err(e) => self.error = Some(format!("Failed to prepare editor file: {}", e)),
        }
    }

    fn open_input(&mut self, title: &str, initial: &str, purpose: InputPurpose) {
        self.input_dialog.open(title, initial, purpose);
        self.modals.push(Modal::Input);
    }

    /// Route committed input text by the dialog's purpose.
    fn apply_input(&mut self, value: String) {
        match self.input_dialog.purpose {
            InputPurpose::SetupField(field) => {
                match field.apply(&mut self.domain, &value) {
                    Ok(()) => {
                        self.domain.recompute();
                        self.status_message = Some(format!("Updated {}", field.label()));
                    }
                    Err(e) => self.error = Some(e),
                }
            }
            InputPurpose::NewDbLine => {
                let line = value.trim();
                if !line.is_empty() {
                    self.domain.append_db_line(line);
                    self.database_table.selected = self.domain.estimates.len().saturating_sub(1);
                    self.status_message = Some(format!("Added {:?}", line));
                }
            }
            InputPurpose::CsvPath => self.import_csv(value.trim()),
            InputPurpose::ReportPath => self.export_report(value.trim()),
            InputPurpose::ActivityDescription(index) => {
                if let Some(activity) = self.domain.activities.get_mut(index) {
                    activity.description = value.trim().to_string();
                }
            }
            InputPurpose::ActivityTime(index) => {
                if let Some(activity) = self.domain.activities.get_mut(index) {
                    activity.time_estimate = value.trim().to_string();
                    self.domain.recompute();
                }
            }
        }
    }

    /// Import a CSV of name,size rows, replacing the raw database list with
    /// canonical `<name> - <size>GB` lines.
    fn import_csv(&mut self, path: &str) {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                self.error = Some(format!("Failed to read {}: {}", path, e));
                return;
            }
        };

        let entries = parser::parse_csv(&contents);
        if entries.is_empty() {
            self.status_message = Some(format!("No database rows found in {}", path));
            return;
        }

        let lines: Vec<String> = entries.iter().map(|e| e.canonical_line()).collect();
        self.domain.set_db_list(lines.join("\n"));
        self.status_message = Some(format!("Imported {} databases from {}", entries.len(), path));
    }

    fn export_report(&mut self, path: &str) {
        if path.is_empty() {
            self.error = Some("Report path must not be empty".to_string());
            return;
        }

        let contents = match report::ReportFormat::from_path(path) {
            report::ReportFormat::Markdown => report::render_report(
                &self.domain.config,
                &self.domain.estimates,
                &self.domain.summary,
                &self.domain.activities,
            ),
            report::ReportFormat::Json => {
                match report::render_json(
                    &self.domain.config,
                    &self.domain.estimates,
                    &self.domain.summary,
                    &self.domain.activities,
                ) {
                    Ok(json) => json,
                    Err(e) => {
                        self.error = Some(format!("Failed to render report: {}", e));
                        return;
                    }
                }
            }
        };

        match fs::write(path, contents) {
            Ok(()) => self.status_message = Some(format!("Report written to {}", path)),
            Err(e) => self.error = Some(format!("Failed to write {}: {}", path, e)),
        }
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Input => self.input_dialog.handle_key_event(key),
        }
    }

    fn handle_tab_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Global keys first, then the active tab's component
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::OpenQuitDialog)),
            KeyCode::Char('?') => return Ok(Some(Action::OpenHelp)),
            KeyCode::Tab => return Ok(Some(Action::NextTab)),
            KeyCode::BackTab => return Ok(Some(Action::PrevTab)),
            _ => {}
        }

        match self.active_tab {
            Tab::Setup => self.setup_form.handle_key_event(key),
            Tab::Databases => self.database_table.handle_key_event(key),
            Tab::Activities => self.activity_table.handle_key_event(key),
            Tab::Summary => self.summary_panel.handle_key_event(key),
        }
    }

    fn selected_activity(&self) -> usize {
        self.activity_table.selected_row(self.domain.activities.len())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top() {
            self.handle_modal_key_event(modal, key)
        } else {
            self.handle_tab_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // A fresh action supersedes whatever was reported last
        if action != Action::Tick {
            self.error = None;
            self.status_message = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => {
                self.active_tab = self.active_tab.next();
            }
            Action::PrevTab => {
                self.active_tab = self.active_tab.previous();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::SubmitInput(value) => {
                self.modals.pop();
                self.apply_input(value);
            }

            // ─────────────────────────────────────────────────────────────────
            // Setup Form
            // ─────────────────────────────────────────────────────────────────
            Action::EditSelectedField => {
                let field = self.setup_form.selected_field();
                let initial = field.value(&self.domain);
                self.open_input(field.label(), &initial, InputPurpose::SetupField(field));
            }
            Action::CycleEnvironment => {
                let environment = self.domain.config.environment.next();
                self.domain.set_environment(environment);
                self.status_message = Some(format!(
                    "Environment: {} (checklist reloaded)",
                    environment.label()
                ));
            }
            Action::EditDiskLayout => {
                self.start_editor_session(EditorTarget::DiskLayout);
            }

            // ─────────────────────────────────────────────────────────────────
            // Database List
            // ─────────────────────────────────────────────────────────────────
            Action::EditDatabaseList => {
                self.start_editor_session(EditorTarget::DatabaseList);
            }
            Action::AddDatabaseLine => {
                self.open_input(
                    "Add database (e.g. Sales - 80GB)",
                    "",
                    InputPurpose::NewDbLine,
                );
            }
            Action::RemoveSelectedDatabase => {
                if !self.domain.estimates.is_empty() {
                    let index = self.database_table.selected_row(self.domain.estimates.len());
                    let name = self.domain.estimates[index].name.clone();
                    self.domain.remove_db_line(index);
                    self.status_message = Some(format!("Removed {}", name));
                }
            }
            Action::ImportCsv => {
                self.open_input("CSV file path (name,size per row)", "", InputPurpose::CsvPath);
            }

            // ─────────────────────────────────────────────────────────────────
            // Activity Checklist
            // ─────────────────────────────────────────────────────────────────
            Action::AddActivity => {
                self.domain.add_activity();
                self.activity_table.selected = self.domain.activities.len() - 1;
            }
            Action::DuplicateActivity => {
                if !self.domain.activities.is_empty() {
                    self.domain.duplicate_activity(self.selected_activity());
                    self.activity_table.selected = self.domain.activities.len() - 1;
                }
            }
            Action::RemoveActivity => {
                if !self.domain.activities.is_empty() {
                    self.domain.remove_activity(self.selected_activity());
                }
            }
            Action::MoveActivityUp => {
                let index = self.selected_activity();
                if self.domain.move_activity_up(index) {
                    self.activity_table.selected = index - 1;
                }
            }
            Action::MoveActivityDown => {
                let index = self.selected_activity();
                if self.domain.move_activity_down(index) {
                    self.activity_table.selected = index + 1;
                }
            }
            Action::EditActivityDescription => {
                let index = self.selected_activity();
                if let Some(activity) = self.domain.activities.get(index) {
                    let initial = activity.description.clone();
                    self.open_input(
                        "Activity description",
                        &initial,
                        InputPurpose::ActivityDescription(index),
                    );
                }
            }
            Action::EditActivityTime => {
                let index = self.selected_activity();
                if let Some(activity) = self.domain.activities.get(index) {
                    let initial = activity.time_estimate.clone();
                    self.open_input(
                        "Time estimate (HH:MM)",
                        &initial,
                        InputPurpose::ActivityTime(index),
                    );
                }
            }
            Action::CycleActivityTeam => {
                let index = self.selected_activity();
                if let Some(activity) = self.domain.activities.get_mut(index) {
                    activity.team = next_team(&activity.team).to_string();
                }
            }
            Action::CycleActivityStatus => {
                let index = self.selected_activity();
                if let Some(activity) = self.domain.activities.get_mut(index) {
                    activity.status = next_status(&activity.status).to_string();
                }
            }
            Action::ReseedActivities => {
                self.domain.reseed_activities();
                self.activity_table.selected = 0;
                self.status_message = Some(format!(
                    "Checklist reset to the {} template",
                    self.domain.config.environment.label()
                ));
            }

            // ─────────────────────────────────────────────────────────────────
            // Report
            // ─────────────────────────────────────────────────────────────────
            Action::ExportReport => {
                self.open_input(
                    "Report file path",
                    "migration-report.md",
                    InputPurpose::ReportPath,
                );
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            domain: &self.domain,
            active_tab: self.active_tab,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };

        draw_home_screen(
            frame,
            area,
            &mut self.setup_form,
            &mut self.database_table,
            &mut self.activity_table,
            &self.summary_panel,
            &ctx,
        )?;

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            Some(Modal::Input) => self.input_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::Environment;

    fn submit(app: &mut App, text: &str) {
        app.update(Action::SubmitInput(text.to_string())).unwrap();
    }

    #[test]
    fn test_cycle_environment_recosts_and_reseeds() {
        let mut app = App::new();
        app.domain.set_db_list("Sales - 100GB".to_string());
        let before = app.domain.estimates[0].monthly_cost;

        app.update(Action::CycleEnvironment).unwrap();
        assert_eq!(app.domain.config.environment, Environment::Iaas);
        assert_ne!(app.domain.estimates[0].monthly_cost, before);
    }

    #[test]
    fn test_add_database_line_via_input() {
        let mut app = App::new();
        let before = app.domain.estimates.len();

        app.update(Action::AddDatabaseLine).unwrap();
        assert_eq!(app.modals.top(), Some(Modal::Input));

        submit(&mut app, "Warehouse - 600GB");
        assert!(app.modals.is_empty());
        assert_eq!(app.domain.estimates.len(), before + 1);
        let added = app.domain.estimates.last().unwrap();
        assert_eq!(added.name, "Warehouse");
        assert_eq!(added.vcores, 16);
    }

    #[test]
    fn test_blank_input_adds_nothing() {
        let mut app = App::new();
        let before = app.domain.estimates.len();
        app.update(Action::AddDatabaseLine).unwrap();
        submit(&mut app, "   ");
        assert_eq!(app.domain.estimates.len(), before);
    }

    #[test]
    fn test_remove_selected_database() {
        let mut app = App::new();
        app.domain.set_db_list("A 10\nB 20\nC 30".to_string());
        app.database_table.selected = 1;

        app.update(Action::RemoveSelectedDatabase).unwrap();
        let names: Vec<&str> = app.domain.estimates.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(app.domain.estimates[1].id, "db-1");
    }

    #[test]
    fn test_numeric_field_rejection_reports_error() {
        let mut app = App::new();
        app.input_dialog.open(
            "DBA hourly rate",
            "200.00",
            InputPurpose::SetupField(crate::components::SetupField::DbaHourCost),
        );
        app.modals.push(Modal::Input);
        submit(&mut app, "lots");
        assert!(app.error.is_some());
        assert_eq!(app.domain.config.dba_hour_cost, 200.0);
    }

    #[test]
    fn test_dba_rate_edit_changes_migration_cost() {
        let mut app = App::new();
        app.domain.set_db_list("Sales - 80GB".to_string());
        let before = app.domain.estimates[0].migration_cost;

        app.input_dialog.open(
            "DBA hourly rate",
            "200.00",
            InputPurpose::SetupField(crate::components::SetupField::DbaHourCost),
        );
        app.modals.push(Modal::Input);
        submit(&mut app, "400");

        assert_eq!(app.domain.estimates[0].migration_cost, before * 2.0);
    }

    #[test]
    fn test_activity_cycles_touch_only_selected_row() {
        let mut app = App::new();
        app.activity_table.selected = 0;
        let team_before = app.domain.activities[0].team.clone();
        let other_before = app.domain.activities[1].clone();

        app.update(Action::CycleActivityTeam).unwrap();
        app.update(Action::CycleActivityStatus).unwrap();

        assert_ne!(app.domain.activities[0].team, team_before);
        assert_eq!(app.domain.activities[1], other_before);
    }

    #[test]
    fn test_activity_time_edit_updates_summary() {
        let mut app = App::new();
        app.activity_table.selected = 0;
        app.update(Action::EditActivityTime).unwrap();
        let before = app.domain.summary.total_activity_time.clone();
        submit(&mut app, "09:00");
        assert_ne!(app.domain.summary.total_activity_time, before);
        assert_eq!(app.domain.activities[0].time_estimate, "09:00");
    }

    #[test]
    fn test_import_csv_replaces_list_with_canonical_lines() {
        let mut app = App::new();
        let dir = std::env::temp_dir().join("sqlmig-tui-test-import");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dbs.csv");
        fs::write(&path, "Sales,80\nCRM\n").unwrap();

        app.input_dialog.open("CSV file path", "", InputPurpose::CsvPath);
        app.modals.push(Modal::Input);
        submit(&mut app, path.to_str().unwrap());

        assert_eq!(app.domain.db_list_text, "Sales - 80GB\nCRM - 50GB");
        assert_eq!(app.domain.estimates.len(), 2);
        assert!(app.status_message.as_deref().unwrap_or("").contains("Imported 2"));
    }

    #[test]
    fn test_import_csv_missing_file_reports_error() {
        let mut app = App::new();
        let before = app.domain.db_list_text.clone();
        app.input_dialog.open("CSV file path", "", InputPurpose::CsvPath);
        app.modals.push(Modal::Input);
        submit(&mut app, "/definitely/not/here.csv");
        assert!(app.error.is_some());
        assert_eq!(app.domain.db_list_text, before);
    }

    #[test]
    fn test_export_report_writes_file() {
        let mut app = App::new();
        let dir = std::env::temp_dir().join("sqlmig-tui-test-export");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.md");

        app.input_dialog.open("Report file path", "", InputPurpose::ReportPath);
        app.modals.push(Modal::Input);
        submit(&mut app, path.to_str().unwrap());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# SQL Server Migration Report"));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_export_json_report() {
        let mut app = App::new();
        let dir = std::env::temp_dir().join("sqlmig-tui-test-export");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");

        app.input_dialog.open("Report file path", "", InputPurpose::ReportPath);
        app.modals.push(Modal::Input);
        submit(&mut app, path.to_str().unwrap());

        let written = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["databases"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = App::new();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(Modal::QuitConfirm));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = App::new();
        app.update(Action::NextTab).unwrap();
        assert_eq!(app.active_tab, Tab::Databases);
        app.update(Action::PrevTab).unwrap();
        assert_eq!(app.active_tab, Tab::Setup);
    }
}
