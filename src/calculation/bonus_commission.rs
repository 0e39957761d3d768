//! Bonus commission calculation functionality.
//!
//! The bonus is a second, independent pass over the ledger against the
//! tier's higher bonus threshold, paid at a single flat rate.

use rust_decimal::Decimal;

use crate::config::CommissionConfig;
use crate::models::{AuditStep, ExperienceTier, Ledger};

use super::base_commission::CommissionResult;
use super::threshold::allocate_against_threshold;

/// Calculates the bonus commission for a ledger under a tier.
///
/// The running total starts from zero; it does not continue from the base
/// commission pass.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::calculate_bonus_commission;
/// use commission_engine::config::CommissionConfig;
/// use commission_engine::models::{ExperienceTier, Ledger, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut ledger = Ledger::new();
/// ledger.append(SaleCategory::Consulting, Decimal::from_str("60000.00").unwrap()).unwrap();
///
/// let result = calculate_bonus_commission(
///     &ledger,
///     &CommissionConfig::default(),
///     ExperienceTier::Probationary,
///     1,
/// );
///
/// // (60000 - 50000) x 0.005
/// assert_eq!(result.commission, Decimal::from_str("50.00").unwrap());
/// ```
pub fn calculate_bonus_commission(
    ledger: &Ledger,
    config: &CommissionConfig,
    tier: ExperienceTier,
    step_number: u32,
) -> CommissionResult {
    let tier_config = config.tier(tier);
    let threshold = tier_config.minimum_sales_for_bonus;
    let bonus_rate = tier_config.bonus_rate;

    let allocation = allocate_against_threshold(ledger.transactions(), threshold);

    let commission: Decimal = allocation
        .allocations
        .iter()
        .map(|a| a.above_threshold * bonus_rate)
        .sum();

    let reasoning = if allocation.commissionable_sales > Decimal::ZERO {
        format!(
            "Sales of ${} exceed {} bonus threshold of ${}: ${} x {} = ${}",
            allocation.net_sales.normalize(),
            tier,
            threshold.normalize(),
            allocation.commissionable_sales.normalize(),
            bonus_rate.normalize(),
            commission.normalize()
        )
    } else {
        format!(
            "Sales of ${} do not exceed {} bonus threshold of ${}, no bonus earned",
            allocation.net_sales.normalize(),
            tier,
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus_commission".to_string(),
        rule_name: "Bonus Commission".to_string(),
        input: serde_json::json!({
            "tier": tier,
            "threshold": threshold.normalize().to_string(),
            "bonus_rate": bonus_rate.normalize().to_string(),
            "sales_count": ledger.len()
        }),
        output: serde_json::json!({
            "net_sales": allocation.net_sales.normalize().to_string(),
            "commissionable_sales": allocation.commissionable_sales.normalize().to_string(),
            "bonus_commission": commission.normalize().to_string()
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
