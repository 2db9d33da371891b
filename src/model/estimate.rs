//! Data models for parsed database entries and computed estimates

use serde::{Deserialize, Serialize};

use crate::model::activity::{minutes_to_hhmm, parse_time_str, Activity};
use crate::services::costing::round2;

/// A database name/size pair extracted from one line of freeform input.
///
/// Entries are ephemeral: they are produced by the parser and consumed by
/// the cost model within a single recompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDbEntry {
    pub name: String,
    pub size_gb: u64,
}

impl RawDbEntry {
    /// Canonical `<name> - <size>GB` rendering.
    ///
    /// Re-parsing a canonical line reproduces the same entry.
    pub fn canonical_line(&self) -> String {
        format!("{} - {}GB", self.name, self.size_gb)
    }
}

/// Per-database sizing and cost estimate.
///
/// The id is positional (`db-<index>`) and the whole list is replaced on
/// every recompute, so estimates are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseEstimate {
    pub id: String,
    pub name: String,
    pub size_gb: u64,
    pub vcores: u32,
    pub migration_hours: u64,
    pub migration_cost: f64,
    pub monthly_cost: f64,
}

/// Aggregated figures across all estimates and checklist activities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub database_count: usize,
    pub total_size_gb: u64,
    pub total_migration_hours: u64,
    pub total_migration_cost: f64,
    pub total_monthly_cost: f64,
    /// Sum of activity time estimates, formatted `HH:MM`
    pub total_activity_time: String,
}

impl EstimateSummary {
    /// Fold the estimate list and activity checklist into totals.
    pub fn compute(estimates: &[DatabaseEstimate], activities: &[Activity]) -> Self {
        let total_minutes: u64 = activities
            .iter()
            .map(|a| parse_time_str(&a.time_estimate))
            .sum();

        Self {
            database_count: estimates.len(),
            total_size_gb: estimates.iter().map(|e| e.size_gb).sum(),
            total_migration_hours: estimates.iter().map(|e| e.migration_hours).sum(),
            total_migration_cost: round2(estimates.iter().map(|e| e.migration_cost).sum()),
            total_monthly_cost: round2(estimates.iter().map(|e| e.monthly_cost).sum()),
            total_activity_time: minutes_to_hhmm(total_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(size_gb: u64, migration_cost: f64, monthly_cost: f64) -> DatabaseEstimate {
        DatabaseEstimate {
            id: "db-0".to_string(),
            name: "Sales".to_string(),
            size_gb,
            vcores: 4,
            migration_hours: 10,
            migration_cost,
            monthly_cost,
        }
    }

    #[test]
    fn test_canonical_line_shape() {
        let entry = RawDbEntry {
            name: "Sales".to_string(),
            size_gb: 80,
        };
        assert_eq!(entry.canonical_line(), "Sales - 80GB");
    }

    #[test]
    fn test_summary_of_empty_inputs() {
        let summary = EstimateSummary::compute(&[], &[]);
        assert_eq!(summary.database_count, 0);
        assert_eq!(summary.total_size_gb, 0);
        assert_eq!(summary.total_migration_cost, 0.0);
        assert_eq!(summary.total_activity_time, "00:00");
    }

    #[test]
    fn test_summary_totals() {
        let estimates = vec![
            estimate(80, 2000.0, 90.6),
            estimate(120, 2000.0, 109.4),
        ];
        let activities = vec![
            Activity::new("a-1", "Install SQL Server", "DBA Team", "Pending", "01:00"),
            Activity::new("a-2", "Restore backups", "DBA Team", "Pending", "00:45"),
        ];

        let summary = EstimateSummary::compute(&estimates, &activities);
        assert_eq!(summary.database_count, 2);
        assert_eq!(summary.total_size_gb, 200);
        assert_eq!(summary.total_migration_hours, 20);
        assert_eq!(summary.total_migration_cost, 4000.0);
        assert_eq!(summary.total_monthly_cost, 200.0);
        assert_eq!(summary.total_activity_time, "01:45");
    }
}
