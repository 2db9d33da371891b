//! Estimation engine services
//!
//! Pure functions with no I/O and no shared state:
//! - Freeform and CSV database-list parsing
//! - Sizing and cost model
//! - Report rendering

pub mod costing;
pub mod parser;
pub mod report;

pub use costing::{estimate_databases, migration_time_hours, recommended_vcores, round2};
pub use parser::{parse_csv, parse_db_line, parse_db_list};
pub use report::render_report;
