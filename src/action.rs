//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Commit the input dialog with its final text
    SubmitInput(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Edit the focused configuration field in an input dialog
    EditSelectedField,
    /// Cycle the target environment to its next value
    CycleEnvironment,
    /// Edit the disk layout notes in the external $EDITOR
    EditDiskLayout,

    // ─────────────────────────────────────────────────────────────────────────
    // Database List
    // ─────────────────────────────────────────────────────────────────────────
    /// Edit the raw database list in the external $EDITOR
    EditDatabaseList,
    /// Append one database line via input dialog
    AddDatabaseLine,
    /// Remove the input line behind the selected estimate row
    RemoveSelectedDatabase,
    /// Import a CSV file of name,size rows (path via input dialog)
    ImportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Activity Checklist
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a fresh checklist row
    AddActivity,
    /// Duplicate the selected checklist row
    DuplicateActivity,
    /// Remove the selected checklist row
    RemoveActivity,
    /// Move the selected checklist row up
    MoveActivityUp,
    /// Move the selected checklist row down
    MoveActivityDown,
    /// Edit the selected row's description via input dialog
    EditActivityDescription,
    /// Edit the selected row's time estimate via input dialog
    EditActivityTime,
    /// Cycle the selected row's owning team
    CycleActivityTeam,
    /// Cycle the selected row's status
    CycleActivityStatus,
    /// Replace the checklist with the current environment's template
    ReseedActivities,

    // ─────────────────────────────────────────────────────────────────────────
    // Report
    // ─────────────────────────────────────────────────────────────────────────
    /// Export the Markdown report (path via input dialog)
    ExportReport,
}
