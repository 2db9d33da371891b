//! Sizing and cost model
//!
//! Pure functions deriving capacity, migration effort, and monthly run cost
//! from database size, the target environment, and the pricing table.

use crate::model::estimate::{DatabaseEstimate, RawDbEntry};
use crate::model::settings::{Environment, MigrationConfig, PricingConfig};

/// Average hours in a month, shared by every compute-cost formula
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Working hours in one migration day
pub const HOURS_PER_DAY: u64 = 8;

/// On-premise storage run cost, $ per GB-month
const ONPREM_STORAGE_PER_GB: f64 = 0.04;

/// Baseline monthly DBA operations effort for an on-premise instance, hours
const ONPREM_BASELINE_OPS_HOURS: f64 = 10.0;

/// Round half away from zero at two decimal places.
///
/// The single rounding rule for every cost figure in the model.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recommended vcore count for a database, from storage size alone.
pub fn recommended_vcores(size_gb: u64) -> u32 {
    if size_gb < 50 {
        2
    } else if size_gb < 200 {
        4
    } else if size_gb < 500 {
        8
    } else if size_gb < 2000 {
        16
    } else {
        32
    }
}

/// Estimated migration labor for one database, in hours.
///
/// Flat buckets up to 1 TB; above that, one 8-hour day per started 500 GB
/// plus 16 hours of setup and validation overhead.
pub fn migration_time_hours(size_gb: u64) -> u64 {
    if size_gb < 50 {
        5
    } else if size_gb < 200 {
        10
    } else if size_gb < 500 {
        20
    } else if size_gb < 1000 {
        32
    } else {
        size_gb.div_ceil(500) * HOURS_PER_DAY + 16
    }
}

/// Monthly recurring cost for one database under the configured environment.
pub fn monthly_cost(
    size_gb: u64,
    vcores: u32,
    config: &MigrationConfig,
    pricing: &PricingConfig,
) -> f64 {
    let size = size_gb as f64;
    let cores = vcores as f64;

    let raw = match config.environment {
        Environment::Iaas => {
            cores * pricing.iaas_vcore_hour * HOURS_PER_MONTH + size * pricing.iaas_storage_month
        }
        Environment::Paas => {
            cores * pricing.paas_vcore_hour * HOURS_PER_MONTH * pricing.paas_ha_multiplier
                + size * pricing.paas_storage_month
        }
        Environment::Saas => size * pricing.saas_per_gb,
        Environment::OnPremise => {
            size * ONPREM_STORAGE_PER_GB + ONPREM_BASELINE_OPS_HOURS * config.dba_hour_cost
        }
    };

    round2(raw)
}

/// Derive the full estimate list from parsed entries.
///
/// Total and order-preserving: one estimate per entry, ids assigned by
/// position. The whole list is rebuilt on every call.
pub fn estimate_databases(
    entries: &[RawDbEntry],
    config: &MigrationConfig,
    pricing: &PricingConfig,
) -> Vec<DatabaseEstimate> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let vcores = recommended_vcores(entry.size_gb);
            let migration_hours = migration_time_hours(entry.size_gb);

            DatabaseEstimate {
                id: format!("db-{}", index),
                name: entry.name.clone(),
                size_gb: entry.size_gb,
                vcores,
                migration_hours,
                migration_cost: round2(migration_hours as f64 * config.dba_hour_cost),
                monthly_cost: monthly_cost(entry.size_gb, vcores, config, pricing),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size_gb: u64) -> RawDbEntry {
        RawDbEntry {
            name: name.to_string(),
            size_gb,
        }
    }

    fn config_for(environment: Environment) -> MigrationConfig {
        let mut config = MigrationConfig::default();
        config.set_environment(environment);
        config
    }

    #[test]
    fn test_vcores_buckets() {
        assert_eq!(recommended_vcores(0), 2);
        assert_eq!(recommended_vcores(49), 2);
        assert_eq!(recommended_vcores(50), 4);
        assert_eq!(recommended_vcores(199), 4);
        assert_eq!(recommended_vcores(200), 8);
        assert_eq!(recommended_vcores(499), 8);
        assert_eq!(recommended_vcores(500), 16);
        assert_eq!(recommended_vcores(1999), 16);
        assert_eq!(recommended_vcores(2000), 32);
    }

    #[test]
    fn test_migration_hours_buckets() {
        assert_eq!(migration_time_hours(10), 5);
        assert_eq!(migration_time_hours(50), 10);
        assert_eq!(migration_time_hours(200), 20);
        assert_eq!(migration_time_hours(500), 32);
        assert_eq!(migration_time_hours(999), 32);
        // ceil(1200/500) * 8 + 16 = 3 * 8 + 16
        assert_eq!(migration_time_hours(1200), 40);
        assert_eq!(migration_time_hours(1000), 32);
        assert_eq!(migration_time_hours(1001), 40);
    }

    #[test]
    fn test_vcores_and_hours_are_monotonic_in_size() {
        let sizes = [0, 1, 49, 50, 199, 200, 499, 500, 999, 1000, 1999, 2000, 5000];
        for pair in sizes.windows(2) {
            assert!(recommended_vcores(pair[0]) <= recommended_vcores(pair[1]));
            assert!(migration_time_hours(pair[0]) <= migration_time_hours(pair[1]));
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let estimates = estimate_databases(
            &[],
            &MigrationConfig::default(),
            &PricingConfig::default(),
        );
        assert!(estimates.is_empty());
    }

    #[test]
    fn test_iaas_monthly_cost_formula() {
        let config = config_for(Environment::Iaas);
        let pricing = PricingConfig {
            iaas_vcore_hour: 0.03,
            iaas_storage_month: 0.03,
            ..PricingConfig::default()
        };
        // 4 * 0.03 * 730 + 100 * 0.03 = 87.6 + 3
        assert_eq!(monthly_cost(100, 4, &config, &pricing), 90.6);
    }

    #[test]
    fn test_paas_monthly_cost_applies_ha_multiplier() {
        let config = config_for(Environment::Paas);
        let pricing = PricingConfig::default();
        // 4 * 0.05 * 730 * 1.6 + 100 * 0.10
        assert_eq!(monthly_cost(100, 4, &config, &pricing), 243.6);
    }

    #[test]
    fn test_saas_monthly_cost_is_flat_per_gb() {
        let config = config_for(Environment::Saas);
        let pricing = PricingConfig::default();
        assert_eq!(monthly_cost(100, 4, &config, &pricing), 25.0);
    }

    #[test]
    fn test_onprem_monthly_cost_uses_dba_rate() {
        let mut config = config_for(Environment::OnPremise);
        config.dba_hour_cost = 200.0;
        let pricing = PricingConfig::default();
        // 100 * 0.04 + 10 * 200
        assert_eq!(monthly_cost(100, 4, &config, &pricing), 2004.0);
    }

    #[test]
    fn test_estimates_preserve_order_and_assign_positional_ids() {
        let entries = vec![entry("Sales", 80), entry("CRM", 1200), entry("Legacy", 10)];
        let estimates = estimate_databases(
            &entries,
            &MigrationConfig::default(),
            &PricingConfig::default(),
        );

        assert_eq!(estimates.len(), 3);
        assert_eq!(estimates[0].id, "db-0");
        assert_eq!(estimates[1].id, "db-1");
        assert_eq!(estimates[2].id, "db-2");
        assert_eq!(estimates[1].name, "CRM");
        assert_eq!(estimates[1].migration_hours, 40);
    }

    #[test]
    fn test_dba_rate_scales_migration_cost_only() {
        let entries = vec![entry("Sales", 80)];
        let pricing = PricingConfig::default();

        let mut config = config_for(Environment::Iaas);
        config.dba_hour_cost = 100.0;
        let cheap = estimate_databases(&entries, &config, &pricing);

        config.dba_hour_cost = 200.0;
        let expensive = estimate_databases(&entries, &config, &pricing);

        assert_eq!(cheap[0].migration_cost * 2.0, expensive[0].migration_cost);
        assert_eq!(cheap[0].vcores, expensive[0].vcores);
        assert_eq!(cheap[0].migration_hours, expensive[0].migration_hours);
        assert_eq!(cheap[0].monthly_cost, expensive[0].monthly_cost);
    }

    #[test]
    fn test_costs_are_rounded_to_cents() {
        let mut config = config_for(Environment::Iaas);
        config.dba_hour_cost = 33.333;
        let pricing = PricingConfig {
            iaas_vcore_hour: 0.0123,
            iaas_storage_month: 0.0456,
            ..PricingConfig::default()
        };
        let estimates = estimate_databases(&[entry("Sales", 80)], &config, &pricing);

        // 10 * 33.333 = 333.33; 4 * 0.0123 * 730 + 80 * 0.0456 = 35.916 + 3.648
        assert_eq!(estimates[0].migration_cost, 333.33);
        assert_eq!(estimates[0].monthly_cost, 39.56);
    }

    #[test]
    fn test_round2_rounds_half_away_from_zero() {
        // 1.125 and 4.375 are exact in binary, so *100 lands exactly on .5
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(4.375), 4.38);
        assert_eq!(round2(-1.125), -1.13);
        assert_eq!(round2(87.6 + 3.0), 90.6);
    }
}
