//! Activity checklist rows and environment seed templates

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::settings::Environment;

/// Selectable status values for a checklist row
pub const STATUS_OPTIONS: [&str; 7] = [
    "Pending",
    "In Progress",
    "Done",
    "Cancelled",
    "In Review",
    "Waiting on Client",
    "N/A",
];

/// Selectable owning teams for a checklist row
pub const TEAM_OPTIONS: [&str; 9] = [
    "DBA Team",
    "Client",
    "Infra",
    "Infra/Client",
    "Infra/DBA",
    "DBA/Client",
    "Client/QA",
    "Vendor/Client",
    "N/A",
];

/// One migration activity in the editable checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub description: String,
    pub team: String,
    pub status: String,
    /// Free text, interpreted as `HH:MM` when it contains two number groups
    pub time_estimate: String,
}

impl Activity {
    pub fn new(id: &str, description: &str, team: &str, status: &str, time_estimate: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            team: team.to_string(),
            status: status.to_string(),
            time_estimate: time_estimate.to_string(),
        }
    }

    /// Copy of this row with a new id and a marked description.
    pub fn duplicate(&self, id: &str) -> Self {
        Self {
            id: id.to_string(),
            description: format!("{} (copy)", self.description),
            team: self.team.clone(),
            status: self.status.clone(),
            time_estimate: self.time_estimate.clone(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == "Done"
    }
}

/// Regex to match the number groups of a time estimate
static TIME_GROUPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Interpret a time-estimate string as minutes.
///
/// Only strings with exactly two number groups count (`01:30`, `1h 30m`);
/// anything else is 0 minutes.
pub fn parse_time_str(time_str: &str) -> u64 {
    let parts: Vec<u64> = TIME_GROUPS_RE
        .find_iter(time_str)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    match parts.as_slice() {
        [hours, minutes] => hours * 60 + minutes,
        _ => 0,
    }
}

/// Format minutes as zero-padded `HH:MM`.
pub fn minutes_to_hhmm(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Next status in the fixed cycling order
pub fn next_status(current: &str) -> &'static str {
    next_option(&STATUS_OPTIONS, current)
}

/// Next team in the fixed cycling order
pub fn next_team(current: &str) -> &'static str {
    next_option(&TEAM_OPTIONS, current)
}

fn next_option<'a>(options: &[&'a str], current: &str) -> &'a str {
    let position = options.iter().position(|o| *o == current);
    match position {
        Some(i) => options[(i + 1) % options.len()],
        None => options[0],
    }
}

/// Build the seed checklist for an environment.
///
/// Row ids encode the environment and index; team slots naming the client
/// are substituted with the configured client name.
pub fn seed_activities(environment: Environment, client_name: &str) -> Vec<Activity> {
    template_rows(environment)
        .iter()
        .enumerate()
        .map(|(index, (description, team, status, time_estimate))| Activity {
            id: format!("activity-{}-{}", environment.label(), index),
            description: description.to_string(),
            team: team.replace("Client", client_name),
            status: status.to_string(),
            time_estimate: time_estimate.to_string(),
        })
        .collect()
}

type TemplateRow = (&'static str, &'static str, &'static str, &'static str);

fn template_rows(environment: Environment) -> &'static [TemplateRow] {
    match environment {
        Environment::OnPremise => ONPREM_TEMPLATE,
        Environment::Iaas => IAAS_TEMPLATE,
        Environment::Paas => PAAS_TEMPLATE,
        Environment::Saas => SAAS_TEMPLATE,
    }
}

const ONPREM_TEMPLATE: &[TemplateRow] = &[
    ("Check new server: storage, DBA login permissions, installation drives", "DBA Team", "Pending", "01:00"),
    ("Provide SQL Server installation ISO and ODBC drivers on the server", "Client", "Pending", ""),
    ("Install SQL Server", "DBA Team", "Pending", "01:00"),
    ("Apply SQL Server patches", "DBA Team", "Pending", "01:00"),
    ("Copy backup files from the source server for restore on the new server", "Client", "Pending", ""),
    ("Migrate and verify jobs", "DBA Team", "Pending", "00:30"),
    ("Migrate triggers", "N/A", "N/A", "00:15"),
    ("Migrate linked servers", "N/A", "N/A", "00:15"),
    ("Migrate server logins", "DBA Team", "Pending", "00:15"),
    ("Configure Database Mail", "N/A", "N/A", "00:15"),
    ("Tune instance memory settings", "DBA Team", "Pending", "00:15"),
    ("Tune instance CPU settings", "DBA Team", "Pending", "00:15"),
    ("Configure Lock Pages in Memory", "DBA Team", "Pending", "00:15"),
    ("Configure Instant File Initialization (IFI)", "DBA Team", "Pending", "00:15"),
    ("Enable Dedicated Administrator Connection (DAC)", "DBA Team", "Pending", "00:15"),
    ("Adjust file growth settings", "DBA Team", "Pending", "00:30"),
    ("Tune tempdb files", "DBA Team", "Pending", "00:15"),
    ("Adjust cost threshold for parallelism", "DBA Team", "Pending", "00:15"),
    ("Adjust max degree of parallelism", "DBA Team", "Pending", "00:15"),
    ("Configure and test backups", "DBA Team", "Pending", "00:30"),
    ("Hand over for acceptance testing", "Client", "Pending", ""),
];

const IAAS_TEMPLATE: &[TemplateRow] = &[
    ("Create VM at the provider (size, image, availability zone)", "Infra/Client", "Pending", "00:30"),
    ("Provision managed disks (OS/Data/Log/TempDB/Backup)", "Infra/Client", "Pending", "00:30"),
    ("Configure network: security groups, subnet, firewall rules", "Infra/Client", "Pending", "00:30"),
    ("Configure storage performance (IOPS/throughput) and attach disks", "Infra/Client", "Pending", "00:30"),
    ("Domain join, service accounts and roles", "Infra/DBA", "Pending", "00:30"),
    ("Apply OS updates and reboot if needed", "Infra/DBA", "Pending", "01:00"),
    ("Configure monitoring agent", "Infra/DBA", "Pending", "00:30"),
    ("Install SQL Server plus required .NET/ODBC components", "DBA Team", "Pending", "01:00"),
    ("Enable IFI and adjust privileges", "DBA Team", "Pending", "00:15"),
    ("Configure Lock Pages in Memory if needed", "DBA Team", "Pending", "00:15"),
    ("Configure tempdb and data files", "DBA Team", "Pending", "00:30"),
    ("Configure autogrowth and file growth", "DBA Team", "Pending", "00:15"),
    ("Configure backups and retention", "DBA Team", "Pending", "00:30"),
    ("Initial restore and validation", "Client", "Pending", ""),
    ("Cutover: switch connection strings and DNS", "DBA/Client", "Pending", "00:30"),
    ("Post-cutover monitoring (48h)", "DBA/Client", "Pending", "08:00"),
    ("Documentation and handover", "DBA Team", "Pending", "01:00"),
];

const PAAS_TEMPLATE: &[TemplateRow] = &[
    ("Choose service tier and region (vCore/DTU/Hyperscale)", "DBA/Client", "Pending", "00:30"),
    ("Configure VNet integration / private endpoint", "Infra/Client", "Pending", "00:30"),
    ("Configure managed server firewall rules", "DBA/Client", "Pending", "00:15"),
    ("Configure point-in-time backup retention", "DBA Team", "Pending", "00:15"),
    ("Provision geo/zone replicas if applicable", "DBA Team", "Pending", "00:30"),
    ("Size vCores and storage, adjust parameters", "DBA Team", "Pending", "00:30"),
    ("Migrate data with the online migration service", "DBA/Client", "Pending", ""),
    ("Apply compatibility fixes and database settings", "DBA Team", "Pending", "00:30"),
    ("Functional and performance tests (smoke + stress)", "Client/QA", "Pending", "02:00"),
    ("Cutover: swap endpoints and DNS", "DBA/Client", "Pending", "00:30"),
    ("Post-cutover monitoring and tier adjustments", "DBA/Client", "Pending", "08:00"),
    ("Documentation and handover (PaaS runbook)", "DBA Team", "Pending", "01:00"),
];

const SAAS_TEMPLATE: &[TemplateRow] = &[
    ("Verify functional compatibility with the SaaS offering", "Client", "Pending", "01:00"),
    ("Export data / ETL into the format the provider requires", "Client", "Pending", ""),
    ("Import data into the SaaS and map users and profiles", "Vendor/Client", "Pending", "02:00"),
    ("Functional validation against the SaaS", "Client/QA", "Pending", "02:00"),
    ("Training and operational handover", "Vendor/Client", "Pending", "01:00"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_str_hhmm() {
        assert_eq!(parse_time_str("01:30"), 90);
        assert_eq!(parse_time_str("00:15"), 15);
        assert_eq!(parse_time_str("08:00"), 480);
    }

    #[test]
    fn test_parse_time_str_rejects_other_shapes() {
        assert_eq!(parse_time_str(""), 0);
        assert_eq!(parse_time_str("soon"), 0);
        assert_eq!(parse_time_str("90"), 0);
        assert_eq!(parse_time_str("1:2:3"), 0);
    }

    #[test]
    fn test_minutes_to_hhmm_zero_pads() {
        assert_eq!(minutes_to_hhmm(0), "00:00");
        assert_eq!(minutes_to_hhmm(75), "01:15");
        assert_eq!(minutes_to_hhmm(600), "10:00");
    }

    #[test]
    fn test_time_round_trip_for_parseable_values() {
        for raw in ["00:15", "01:00", "08:00", "10:45"] {
            assert_eq!(minutes_to_hhmm(parse_time_str(raw)), raw);
        }
    }

    #[test]
    fn test_seed_substitutes_client_name_in_teams() {
        let rows = seed_activities(Environment::OnPremise, "AcmeCorp");
        assert!(rows.iter().any(|a| a.team == "AcmeCorp"));
        assert!(rows.iter().all(|a| !a.team.contains("Client")));
        assert_eq!(rows[0].id, "activity-On-Premise-0");
    }

    #[test]
    fn test_seed_templates_differ_by_environment() {
        let onprem = seed_activities(Environment::OnPremise, "Client");
        let saas = seed_activities(Environment::Saas, "Client");
        assert!(onprem.len() > saas.len());
        assert_ne!(onprem[0].description, saas[0].description);
    }

    #[test]
    fn test_status_and_team_cycling() {
        assert_eq!(next_status("Pending"), "In Progress");
        assert_eq!(next_status("N/A"), "Pending");
        assert_eq!(next_status("something else"), "Pending");
        assert_eq!(next_team("DBA Team"), "Client");
        assert_eq!(next_team("N/A"), "DBA Team");
    }

    #[test]
    fn test_duplicate_marks_description() {
        let original = Activity::new("a-1", "Install SQL Server", "DBA Team", "Pending", "01:00");
        let copy = original.duplicate("a-2");
        assert_eq!(copy.id, "a-2");
        assert_eq!(copy.description, "Install SQL Server (copy)");
        assert_eq!(copy.time_estimate, original.time_estimate);
    }
}
