//! Migration report rendering
//!
//! Builds the exportable Markdown report from the current configuration,
//! estimates, and checklist. Rendering is pure string assembly; writing the
//! file is the caller's concern.

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::model::activity::Activity;
use crate::model::estimate::{DatabaseEstimate, EstimateSummary};
use crate::model::settings::MigrationConfig;

/// Report output format, chosen from the export path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn from_path(path: &str) -> Self {
        if path.to_lowercase().ends_with(".json") {
            ReportFormat::Json
        } else {
            ReportFormat::Markdown
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    config: &'a MigrationConfig,
    summary: &'a EstimateSummary,
    databases: &'a [DatabaseEstimate],
    activities: &'a [Activity],
}

/// Render the report as pretty-printed JSON.
pub fn render_json(
    config: &MigrationConfig,
    estimates: &[DatabaseEstimate],
    summary: &EstimateSummary,
    activities: &[Activity],
) -> Result<String> {
    let report = JsonReport {
        generated: Local::now().format("%Y-%m-%d").to_string(),
        config,
        summary,
        databases: estimates,
        activities,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the full Markdown report.
pub fn render_report(
    config: &MigrationConfig,
    estimates: &[DatabaseEstimate],
    summary: &EstimateSummary,
    activities: &[Activity],
) -> String {
    let mut out = String::new();

    out.push_str("# SQL Server Migration Report\n\n");
    out.push_str(&format!(
        "Client: {} · Environment: {} · Generated: {}\n\n",
        config.client_name,
        config.environment.label(),
        Local::now().format("%Y-%m-%d"),
    ));

    render_server_configuration(&mut out, config);
    render_disk_layout(&mut out, config);
    render_database_estimates(&mut out, estimates, summary);
    render_activities(&mut out, activities, summary);
    render_summary(&mut out, config, summary);

    out
}

fn render_server_configuration(out: &mut String, config: &MigrationConfig) {
    out.push_str("## Server Configuration\n\n");

    let rows = [
        ("Client name", config.client_name.as_str()),
        ("OS version", config.os_version.as_str()),
        ("SQL Server version", config.sql_version.as_str()),
        ("Environment", config.environment.label()),
        ("Instance collation", config.collation.as_str()),
        ("Instance memory", config.memory_note.as_str()),
        ("Instance CPUs", config.cpu_note.as_str()),
    ];

    out.push_str("| Setting | Value |\n|---|---|\n");
    for (label, value) in rows {
        out.push_str(&format!("| {} | {} |\n", label, value));
    }
    out.push('\n');
}

fn render_disk_layout(out: &mut String, config: &MigrationConfig) {
    if config.disk_layout.trim().is_empty() {
        return;
    }

    out.push_str("## Disk Layout\n\n");
    for line in config.disk_layout.lines() {
        if !line.trim().is_empty() {
            out.push_str(&format!("- {}\n", line.trim()));
        }
    }
    out.push('\n');
}

fn render_database_estimates(
    out: &mut String,
    estimates: &[DatabaseEstimate],
    summary: &EstimateSummary,
) {
    out.push_str("## Database Estimates\n\n");

    if estimates.is_empty() {
        out.push_str("No databases configured.\n\n");
        return;
    }

    out.push_str(
        "| # | Database | Size (GB) | vCores | Migration (h) | Migration cost | Monthly cost |\n",
    );
    out.push_str("|---|---|---|---|---|---|---|\n");

    for (index, estimate) in estimates.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.2} | {:.2} |\n",
            index + 1,
            estimate.name,
            estimate.size_gb,
            estimate.vcores,
            estimate.migration_hours,
            estimate.migration_cost,
            estimate.monthly_cost,
        ));
    }

    out.push_str(&format!(
        "| | **Total** | {} | | {} | {:.2} | {:.2} |\n\n",
        summary.total_size_gb,
        summary.total_migration_hours,
        summary.total_migration_cost,
        summary.total_monthly_cost,
    ));
}

fn render_activities(out: &mut String, activities: &[Activity], summary: &EstimateSummary) {
    out.push_str("## Migration Activities\n\n");

    if activities.is_empty() {
        out.push_str("No activities planned.\n\n");
        return;
    }

    out.push_str("| # | Activity | Team | Status | Time |\n|---|---|---|---|---|\n");
    for (index, activity) in activities.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            index + 1,
            activity.description,
            activity.team,
            activity.status,
            activity.time_estimate,
        ));
    }

    let done = activities.iter().filter(|a| a.is_done()).count();
    out.push_str(&format!(
        "\nTotal estimated time: {} · {}/{} done\n\n",
        summary.total_activity_time,
        done,
        activities.len(),
    ));
}

fn render_summary(out: &mut String, config: &MigrationConfig, summary: &EstimateSummary) {
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- Databases: {}\n", summary.database_count));
    out.push_str(&format!("- Total size: {} GB\n", summary.total_size_gb));
    out.push_str(&format!(
        "- Total migration effort: {} hours\n",
        summary.total_migration_hours
    ));
    out.push_str(&format!(
        "- Total migration cost: {:.2}\n",
        summary.total_migration_cost
    ));
    out.push_str(&format!(
        "- Monthly cost ({}): {:.2}\n",
        config.environment.label(),
        summary.total_monthly_cost
    ));
}
