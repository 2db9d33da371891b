//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business/data state (inputs, estimates, checklist)
//! - `Modal`/`ModalStack` - Modal overlay management
//! - `Tab` - Main screen tab selection

pub mod activity;
pub mod domain;
pub mod estimate;
pub mod modal;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use activity::Activity;
pub use domain::DomainState;
pub use estimate::{DatabaseEstimate, EstimateSummary, RawDbEntry};
pub use settings::{Environment, MigrationConfig, PricingConfig};
pub use ui::Tab;
