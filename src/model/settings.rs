//! Migration target configuration and pricing inputs

use serde::{Deserialize, Serialize};

/// Default DBA hourly rate applied to every database
pub const DEFAULT_DBA_HOUR_COST: f64 = 200.0;

/// Deployment target class governing the monthly-cost formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    OnPremise,
    Iaas,
    Paas,
    Saas,
}

impl Environment {
    pub fn all() -> [Environment; 4] {
        [
            Environment::OnPremise,
            Environment::Iaas,
            Environment::Paas,
            Environment::Saas,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Environment::OnPremise => "On-Premise",
            Environment::Iaas => "IaaS",
            Environment::Paas => "PaaS",
            Environment::Saas => "SaaS",
        }
    }

    /// Next environment in cycling order
    pub fn next(&self) -> Environment {
        let all = Environment::all();
        let index = all.iter().position(|e| e == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Default instance memory guidance for this environment
    pub fn default_memory_note(&self) -> &'static str {
        match self {
            Environment::Paas => "Minimum 16GB / ideal 32GB",
            Environment::Saas => "Managed by provider (SaaS)",
            _ => "Minimum 32GB / ideal 64GB",
        }
    }

    /// Default instance CPU guidance for this environment
    pub fn default_cpu_note(&self) -> &'static str {
        match self {
            Environment::Saas => "Managed by provider (SaaS)",
            _ => "Minimum 4 cores / ideal 8",
        }
    }
}

/// Server and engagement configuration for one migration project.
///
/// The cost model reads only `environment` and `dba_hour_cost`; the
/// remaining fields feed the exported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    pub client_name: String,
    pub os_version: String,
    pub sql_version: String,
    pub environment: Environment,
    /// Free-text disk layout notes, one volume per line
    pub disk_layout: String,
    pub collation: String,
    pub memory_note: String,
    pub cpu_note: String,
    pub dba_hour_cost: f64,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            client_name: "Client".to_string(),
            os_version: "Windows Server 2019 Datacenter".to_string(),
            sql_version: "Microsoft SQL Server 2019".to_string(),
            environment,
            disk_layout: default_disk_layout(),
            collation: String::new(),
            memory_note: environment.default_memory_note().to_string(),
            cpu_note: environment.default_cpu_note().to_string(),
            dba_hour_cost: DEFAULT_DBA_HOUR_COST,
        }
    }
}

impl MigrationConfig {
    /// Switch environment and apply its memory/CPU guidance defaults.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        self.memory_note = environment.default_memory_note().to_string();
        self.cpu_note = environment.default_cpu_note().to_string();
    }
}

/// Reference disk layout suggested for a fresh SQL Server host
fn default_disk_layout() -> String {
    [
        "(C:) OS - 50 GB",
        "(B:) Backup - 35 GB",
        "(D:) Data - 20 GB",
        "(L:) Log - 10 GB",
        "(T:) TempDB - 7 GB",
        "(E:) SQL binaries - 50 GB",
    ]
    .join("\n")
}

/// Rates and multipliers for the monthly-cost formulas.
///
/// All six values are independent; the engine assumes they are valid finite
/// numbers and the form layer only commits fields that parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// IaaS compute, $ per vcore-hour
    pub iaas_vcore_hour: f64,
    /// IaaS storage, $ per GB-month
    pub iaas_storage_month: f64,
    /// PaaS compute, $ per vcore-hour
    pub paas_vcore_hour: f64,
    /// PaaS storage, $ per GB-month
    pub paas_storage_month: f64,
    /// Multiplier on PaaS compute for high-availability replicas
    pub paas_ha_multiplier: f64,
    /// SaaS flat rate, $ per GB-month
    pub saas_per_gb: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            iaas_vcore_hour: 0.03,
            iaas_storage_month: 0.03,
            paas_vcore_hour: 0.05,
            paas_storage_month: 0.10,
            paas_ha_multiplier: 1.6,
            saas_per_gb: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cycle_covers_all_values() {
        let mut env = Environment::OnPremise;
        let mut seen = vec![env];
        for _ in 0..3 {
            env = env.next();
            seen.push(env);
        }
        assert_eq!(seen, Environment::all().to_vec());
        assert_eq!(env.next(), Environment::OnPremise);
    }

    #[test]
    fn test_environment_labels() {
        assert_eq!(Environment::OnPremise.label(), "On-Premise");
        assert_eq!(Environment::Iaas.label(), "IaaS");
        assert_eq!(Environment::Paas.label(), "PaaS");
        assert_eq!(Environment::Saas.label(), "SaaS");
    }

    #[test]
    fn test_set_environment_applies_guidance_defaults() {
        let mut config = MigrationConfig::default();
        assert_eq!(config.memory_note, "Minimum 32GB / ideal 64GB");

        config.set_environment(Environment::Paas);
        assert_eq!(config.memory_note, "Minimum 16GB / ideal 32GB");
        assert_eq!(config.cpu_note, "Minimum 4 cores / ideal 8");

        config.set_environment(Environment::Saas);
        assert_eq!(config.memory_note, "Managed by provider (SaaS)");
        assert_eq!(config.cpu_note, "Managed by provider (SaaS)");
    }
}
