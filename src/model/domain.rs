//! Domain state - business/data state separate from UI concerns

use crate::model::activity::{seed_activities, Activity};
use crate::model::estimate::{DatabaseEstimate, EstimateSummary};
use crate::model::settings::{Environment, MigrationConfig, PricingConfig};
use crate::services::{costing, parser};

/// Domain state containing all business data.
///
/// Three inputs (raw database text, migration config, pricing) and the
/// derived outputs. The estimate list and summary are replaced wholesale by
/// `recompute` whenever any input changes; nothing is diffed in place.
pub struct DomainState {
    /// Raw database list, one database per line
    pub db_list_text: String,

    /// Server and engagement configuration
    pub config: MigrationConfig,

    /// Pricing table for the monthly-cost formulas
    pub pricing: PricingConfig,

    /// Derived estimates, rebuilt on every recompute
    pub estimates: Vec<DatabaseEstimate>,

    /// Derived totals, rebuilt alongside the estimates
    pub summary: EstimateSummary,

    /// Editable migration checklist
    pub activities: Vec<Activity>,

    /// Monotonic counter for ids of user-created checklist rows
    next_activity_seq: u64,
}

impl Default for DomainState {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainState {
    pub fn new() -> Self {
        let config = MigrationConfig::default();
        let activities = seed_activities(config.environment, &config.client_name);

        let mut state = Self {
            db_list_text: "MainDb\nReportingDb".to_string(),
            config,
            pricing: PricingConfig::default(),
            estimates: Vec::new(),
            summary: EstimateSummary::default(),
            activities,
            next_activity_seq: 0,
        };
        state.recompute();
        state
    }

    /// Rebuild the estimate list and summary from the current inputs.
    pub fn recompute(&mut self) {
        let entries = parser::parse_db_list(&self.db_list_text);
        self.estimates = costing::estimate_databases(&entries, &self.config, &self.pricing);
        self.summary = EstimateSummary::compute(&self.estimates, &self.activities);
    }

    /// Switch environment: applies guidance defaults, reseeds the checklist,
    /// and recomputes.
    pub fn set_environment(&mut self, environment: Environment) {
        self.config.set_environment(environment);
        self.reseed_activities();
    }

    /// Replace the checklist with the template for the current environment.
    pub fn reseed_activities(&mut self) {
        self.activities = seed_activities(self.config.environment, &self.config.client_name);
        self.recompute();
    }

    /// Replace the raw database list and recompute.
    pub fn set_db_list(&mut self, text: String) {
        self.db_list_text = text;
        self.recompute();
    }

    /// Append one line to the raw database list and recompute.
    pub fn append_db_line(&mut self, line: &str) {
        if !self.db_list_text.is_empty() && !self.db_list_text.ends_with('\n') {
            self.db_list_text.push('\n');
        }
        self.db_list_text.push_str(line);
        self.recompute();
    }

    /// Remove the input line behind estimate row `index` and recompute.
    ///
    /// Estimates map to the non-blank input lines in order, so the n-th
    /// estimate row corresponds to the n-th non-blank line.
    pub fn remove_db_line(&mut self, index: usize) {
        let mut non_blank_seen = 0;
        let kept: Vec<&str> = self
            .db_list_text
            .lines()
            .filter(|line| {
                if line.trim().is_empty() {
                    return true;
                }
                let keep = non_blank_seen != index;
                non_blank_seen += 1;
                keep
            })
            .collect();

        self.db_list_text = kept.join("\n");
        self.recompute();
    }

    /// Append a fresh default checklist row.
    pub fn add_activity(&mut self) {
        let id = self.next_activity_id();
        self.activities.push(Activity::new(
            &id,
            "New migration activity",
            "DBA Team",
            "Pending",
            "00:30",
        ));
        self.recompute();
    }

    /// Append a copy of checklist row `index`.
    pub fn duplicate_activity(&mut self, index: usize) {
        if let Some(activity) = self.activities.get(index).cloned() {
            let id = self.next_activity_id();
            self.activities.push(activity.duplicate(&id));
            self.recompute();
        }
    }

    pub fn remove_activity(&mut self, index: usize) {
        if index < self.activities.len() {
            self.activities.remove(index);
            self.recompute();
        }
    }

    /// Swap checklist row `index` with its predecessor. Returns true on move.
    pub fn move_activity_up(&mut self, index: usize) -> bool {
        if index > 0 && index < self.activities.len() {
            self.activities.swap(index, index - 1);
            true
        } else {
            false
        }
    }

    /// Swap checklist row `index` with its successor. Returns true on move.
    pub fn move_activity_down(&mut self, index: usize) -> bool {
        if index + 1 < self.activities.len() {
            self.activities.swap(index, index + 1);
            true
        } else {
            false
        }
    }

    fn next_activity_id(&mut self) -> String {
        self.next_activity_seq += 1;
        format!("activity-user-{}", self.next_activity_seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_recomputed_and_seeded() {
        let state = DomainState::new();
        assert_eq!(state.estimates.len(), 2);
        assert_eq!(state.summary.database_count, 2);
        assert!(!state.activities.is_empty());
    }

    #[test]
    fn test_recompute_yields_one_estimate_per_non_blank_line() {
        let mut state = DomainState::new();
        state.set_db_list("Sales - 80GB\n\nCRM|120\n   \nLegacy\n".to_string());
        assert_eq!(state.estimates.len(), 3);
        assert_eq!(state.estimates[0].name, "Sales");
        assert_eq!(state.estimates[2].size_gb, 50);
    }

    #[test]
    fn test_recompute_reassigns_positional_ids() {
        let mut state = DomainState::new();
        state.set_db_list("A 10\nB 20".to_string());
        assert_eq!(state.estimates[1].id, "db-1");

        state.remove_db_line(0);
        assert_eq!(state.estimates.len(), 1);
        assert_eq!(state.estimates[0].name, "B");
        assert_eq!(state.estimates[0].id, "db-0");
    }

    #[test]
    fn test_remove_db_line_skips_blank_lines() {
        let mut state = DomainState::new();
        state.set_db_list("A 10\n\nB 20\nC 30".to_string());
        state.remove_db_line(1);
        assert_eq!(state.db_list_text, "A 10\n\nC 30");
        assert_eq!(state.estimates.len(), 2);
    }

    #[test]
    fn test_append_db_line_recomputes() {
        let mut state = DomainState::new();
        state.set_db_list("A 10".to_string());
        state.append_db_line("B - 500GB");
        assert_eq!(state.estimates.len(), 2);
        assert_eq!(state.estimates[1].vcores, 16);
    }

    #[test]
    fn test_environment_change_reseeds_checklist_and_recosts() {
        let mut state = DomainState::new();
        state.set_db_list("Sales - 100GB".to_string());
        let onprem_monthly = state.estimates[0].monthly_cost;
        let onprem_rows = state.activities.len();

        state.set_environment(Environment::Saas);
        assert_ne!(state.estimates[0].monthly_cost, onprem_monthly);
        assert_ne!(state.activities.len(), onprem_rows);
        assert_eq!(state.estimates[0].monthly_cost, 25.0);
    }

    #[test]
    fn test_activity_ops_update_summary() {
        let mut state = DomainState::new();
        state.set_environment(Environment::Saas);
        let seeded_time = state.summary.total_activity_time.clone();

        state.add_activity();
        assert_ne!(state.summary.total_activity_time, seeded_time);

        let last = state.activities.len() - 1;
        state.duplicate_activity(last);
        assert!(state.activities.last().unwrap().description.ends_with("(copy)"));

        let count = state.activities.len();
        state.remove_activity(count - 1);
        assert_eq!(state.activities.len(), count - 1);
    }

    #[test]
    fn test_activity_reorder_bounds() {
        let mut state = DomainState::new();
        assert!(!state.move_activity_up(0));
        let last = state.activities.len() - 1;
        assert!(!state.move_activity_down(last));

        let first = state.activities[0].clone();
        assert!(state.move_activity_down(0));
        assert_eq!(state.activities[1], first);
    }

    #[test]
    fn test_user_activity_ids_are_unique() {
        let mut state = DomainState::new();
        state.add_activity();
        state.add_activity();
        let ids: Vec<&str> = state
            .activities
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
