//! Base commission calculation functionality.
//!
//! This module provides the function for calculating the per-category base
//! commission on sales above a tier's minimum-sales threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CommissionConfig;
use crate::models::{AuditStep, ExperienceTier, Ledger, SaleAllocation};

use super::threshold::allocate_against_threshold;

/// The result of a commission pass over a ledger.
///
/// Shared by the base and bonus calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    /// The commission earned.
    pub commission: Decimal,
    /// The threshold the sales were measured against.
    pub threshold: Decimal,
    /// The below/above split of every sale.
    pub allocations: Vec<SaleAllocation>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base commission for a ledger under a tier.
///
/// Sales are allocated against the tier's `minimum_sales_for_commission`
/// in ledger order, and each commissionable portion is paid at the rate for
/// that sale's category. A sale is never split across two rates.
///
/// # Arguments
///
/// * `ledger` - The recorded sales for the period
/// * `config` - The commission configuration
/// * `tier` - The experience tier in effect
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::calculate_commission;
/// use commission_engine::config::CommissionConfig;
/// use commission_engine::models::{ExperienceTier, Ledger, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut ledger = Ledger::new();
/// ledger.append(SaleCategory::Basic, Decimal::from_str("1500.00").unwrap()).unwrap();
/// ledger.append(SaleCategory::Maintenance, Decimal::from_str("1000.00").unwrap()).unwrap();
///
/// let result = calculate_commission(
///     &ledger,
///     &CommissionConfig::default(),
///     ExperienceTier::Probationary,
///     1,
/// );
///
/// // (1500 + 1000 - 2000) x 0.03
/// assert_eq!(result.commission, Decimal::from_str("15.00").unwrap());
/// ```
pub fn calculate_commission(
    ledger: &Ledger,
    config: &CommissionConfig,
    tier: ExperienceTier,
    step_number: u32,
) -> CommissionResult {
    let tier_config = config.tier(tier);
    let threshold = tier_config.minimum_sales_for_commission;

    let allocation = allocate_against_threshold(ledger.transactions(), threshold);

    let commission: Decimal = allocation
        .allocations
        .iter()
        .map(|a| a.above_threshold * tier_config.rates.rate_for(a.category))
        .sum();

    let reasoning = if allocation.commissionable_sales > Decimal::ZERO {
        format!(
            "Sales of ${} exceed {} threshold of ${} by ${}, earning ${} commission",
            allocation.net_sales.normalize(),
            tier,
            threshold.normalize(),
            allocation.commissionable_sales.normalize(),
            commission.normalize()
        )
    } else {
        format!(
            "Sales of ${} do not exceed {} threshold of ${}, no commission earned",
            allocation.net_sales.normalize(),
            tier,
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_commission".to_string(),
        rule_name: "Base Commission".to_string(),
        input: serde_json::json!({
            "tier": tier,
            "threshold": threshold.normalize().to_string(),
            "sales_count": ledger.len(),
            "rates": {
                "basic": tier_config.rates.basic.normalize().to_string(),
                "maintenance": tier_config.rates.maintenance.normalize().to_string(),
                "replacement": tier_config.rates.replacement.normalize().to_string(),
                "consulting": tier_config.rates.consulting.normalize().to_string()
            }
        }),
        output: serde_json::json!({
            "net_sales": allocation.net_sales.normalize().to_string(),
            "commissionable_sales": allocation.commissionable_sales.normalize().to_string(),
            "commission": commission.normalize().to_string()
        }),
        reasoning,
    };

    CommissionResult {
        commission,
        threshold,
        allocations: allocation.allocations,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryRates, LimitsConfig, TierConfig, TiersConfig};
    use crate::models::SaleCategory;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ledger_of(sales: &[(SaleCategory, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (category, amount) in sales {
            ledger.append(*category, dec(amount)).unwrap();
        }
        ledger
    }

    fn probationary(ledger: &Ledger) -> CommissionResult {
        calculate_commission(
            ledger,
            &CommissionConfig::default(),
            ExperienceTier::Probationary,
            1,
        )
    }

    fn experienced(ledger: &Ledger) -> CommissionResult {
        calculate_commission(
            ledger,
            &CommissionConfig::default(),
            ExperienceTier::Experienced,
            1,
        )
    }

    // ==========================================================================
    // Straddling sale uses the straddling sale's own rate
    // ==========================================================================
    #[test]
    fn test_probationary_straddling_maintenance_sale() {
        let ledger = ledger_of(&[
            (SaleCategory::Basic, "1500.00"),
            (SaleCategory::Maintenance, "1000.00"),
        ]);

        let result = probationary(&ledger);

        assert_eq!(result.commission, dec("15.00"));
        assert_eq!(result.threshold, dec("2000.00"));
        assert_eq!(result.allocations[1].above_threshold, dec("500.00"));
    }

    #[test]
    fn test_single_consulting_sale_straddles() {
        let ledger = ledger_of(&[(SaleCategory::Consulting, "3000.00")]);

        let result = probationary(&ledger);

        // 1000 x 0.03
        assert_eq!(result.commission, dec("30.00"));
    }

    #[test]
    fn test_sales_after_threshold_use_their_own_rates() {
        let ledger = ledger_of(&[
            (SaleCategory::Basic, "2000.00"),
            (SaleCategory::Basic, "100.00"),
            (SaleCategory::Maintenance, "100.00"),
            (SaleCategory::Replacement, "100.00"),
            (SaleCategory::Consulting, "100.00"),
        ]);

        let result = probationary(&ledger);

        // 100 x (0.02 + 0.03 + 0.01 + 0.03)
        assert_eq!(result.commission, dec("9.00"));
    }

    #[test]
    fn test_experienced_uses_experienced_threshold_and_rates() {
        let ledger = ledger_of(&[
            (SaleCategory::Basic, "4000.00"),
            (SaleCategory::Replacement, "2000.00"),
            (SaleCategory::Consulting, "1000.00"),
        ]);

        let result = experienced(&ledger);

        // (6000 - 5000) x 0.015 + 1000 x 0.08
        assert_eq!(result.threshold, dec("5000.00"));
        assert_eq!(result.commission, dec("95.00"));
    }

    #[test]
    fn test_same_ledger_differs_by_tier() {
        let ledger = ledger_of(&[(SaleCategory::Basic, "3000.00")]);

        assert_eq!(probationary(&ledger).commission, dec("20.00"));
        assert_eq!(experienced(&ledger).commission, Decimal::ZERO);
    }

    // ==========================================================================
    // Edge cases
    // ==========================================================================
    #[test]
    fn test_empty_ledger_earns_nothing() {
        let result = probationary(&Ledger::new());
        assert_eq!(result.commission, Decimal::ZERO);
        assert!(result.allocations.is_empty());
    }

    #[test]
    fn test_below_threshold_earns_nothing() {
        let ledger = ledger_of(&[(SaleCategory::Consulting, "1999.99")]);
        assert_eq!(probationary(&ledger).commission, Decimal::ZERO);
    }

    #[test]
    fn test_exactly_at_threshold_earns_nothing() {
        let ledger = ledger_of(&[
            (SaleCategory::Consulting, "1000.00"),
            (SaleCategory::Consulting, "1000.00"),
        ]);
        assert_eq!(probationary(&ledger).commission, Decimal::ZERO);
    }

    #[test]
    fn test_order_changes_which_rate_applies() {
        let basic_last = ledger_of(&[
            (SaleCategory::Consulting, "2000.00"),
            (SaleCategory::Basic, "1000.00"),
        ]);
        let consulting_last = ledger_of(&[
            (SaleCategory::Basic, "1000.00"),
            (SaleCategory::Consulting, "2000.00"),
        ]);

        assert_eq!(probationary(&basic_last).commission, dec("20.00"));
        assert_eq!(probationary(&consulting_last).commission, dec("30.00"));
    }

    #[test]
    fn test_no_rounding_drift_over_many_small_sales() {
        let mut ledger = Ledger::new();
        ledger.append(SaleCategory::Basic, dec("2000.00")).unwrap();
        for _ in 0..10_000 {
            ledger.append(SaleCategory::Maintenance, dec("0.10")).unwrap();
        }

        // 1000.00 x 0.03
        assert_eq!(probationary(&ledger).commission, dec("30.00"));
    }

    #[test]
    fn test_custom_configuration() {
        let tier = TierConfig {
            rates: CategoryRates {
                basic: dec("0.10"),
                maintenance: dec("0.20"),
                replacement: dec("0.30"),
                consulting: dec("0.40"),
            },
            minimum_sales_for_commission: dec("100"),
            minimum_sales_for_bonus: dec("1000"),
            bonus_rate: dec("0.01"),
        };
        let config = CommissionConfig::new(
            LimitsConfig {
                max_sale_amount: dec("1000"),
            },
            TiersConfig {
                probationary: tier.clone(),
                experienced: tier,
            },
        )
        .unwrap();
        let ledger = ledger_of(&[(SaleCategory::Replacement, "150")]);

        let result = calculate_commission(&ledger, &config, ExperienceTier::Probationary, 1);

        assert_eq!(result.commission, dec("15.00"));
    }

    // ==========================================================================
    // Audit trail
    // ==========================================================================
    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let ledger = ledger_of(&[
            (SaleCategory::Basic, "1500.00"),
            (SaleCategory::Maintenance, "1000.00"),
        ]);

        let result = calculate_commission(
            &ledger,
            &CommissionConfig::default(),
            ExperienceTier::Probationary,
            3,
        );

        let step = &result.audit_step;
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "base_commission");
        assert_eq!(step.input["tier"], "probationary");
        assert_eq!(step.input["threshold"], "2000");
        assert_eq!(step.input["sales_count"], 2);
        assert_eq!(step.input["rates"]["maintenance"], "0.03");
        assert_eq!(step.output["net_sales"], "2500");
        assert_eq!(step.output["commissionable_sales"], "500");
        assert_eq!(step.output["commission"], "15");
        assert!(step.reasoning.contains("exceed"));
    }

    #[test]
    fn test_audit_reasoning_when_no_commission() {
        let result = probationary(&Ledger::new());
        assert!(result.audit_step.reasoning.contains("no commission"));
    }
}
