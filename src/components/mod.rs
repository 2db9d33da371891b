//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod activity_table;
pub mod database_table;
pub mod help_dialog;
pub mod home;
pub mod input_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod setup_form;
pub mod summary_panel;
pub mod table;

pub use activity_table::ActivityTable;
pub use database_table::DatabaseTable;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeRenderContext};
pub use input_dialog::{InputDialog, InputPurpose};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use setup_form::{SetupField, SetupForm};
pub use summary_panel::SummaryPanel;
