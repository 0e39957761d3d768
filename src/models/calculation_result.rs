//! Calculation result models for the Commission Engine.
//!
//! This module contains the [`CommissionStatement`] type and its associated
//! structures that capture all outputs from a commission calculation,
//! including per-sale allocations, totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExperienceTier, SaleCategory};

/// How one sale splits around a threshold.
///
/// `below_threshold + above_threshold` always equals `amount`.
///
/// # Example
///
/// ```
/// use commission_engine::models::{SaleAllocation, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let allocation = SaleAllocation {
///     index: 1,
///     category: SaleCategory::Maintenance,
///     amount: Decimal::from_str("1000.00").unwrap(),
///     below_threshold: Decimal::from_str("500.00").unwrap(),
///     above_threshold: Decimal::from_str("500.00").unwrap(),
/// };
/// assert!(allocation.straddles_threshold());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleAllocation {
    /// Position of the sale in the ledger.
    pub index: usize,
    /// The sale category.
    pub category: SaleCategory,
    /// The full sale amount.
    pub amount: Decimal,
    /// The portion that fell at or below the threshold.
    pub below_threshold: Decimal,
    /// The commissionable portion above the threshold.
    pub above_threshold: Decimal,
}

impl SaleAllocation {
    /// Returns true if the sale was split between both sides of the threshold.
    pub fn straddles_threshold(&self) -> bool {
        self.below_threshold > Decimal::ZERO && self.above_threshold > Decimal::ZERO
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag conditions that did not stop the calculation, such as
/// sales discarded under [`AppendPolicy::Discard`](crate::calculator::AppendPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Aggregated monetary results of one calculation cycle.
///
/// # Example
///
/// ```
/// use commission_engine::models::CommissionTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = CommissionTotals::new(
///     Decimal::from_str("2500.00").unwrap(),
///     Decimal::from_str("2000.00").unwrap(),
///     Decimal::from_str("15.00").unwrap(),
///     Decimal::ZERO,
/// );
/// assert_eq!(totals.total_commission, Decimal::from_str("15.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTotals {
    /// Sum of every recorded sale.
    pub total_sales: Decimal,
    /// The tier's threshold before base commission accrues.
    pub minimum_sales_for_commission: Decimal,
    /// Base commission across all categories.
    pub commission: Decimal,
    /// Bonus commission above the bonus threshold.
    pub bonus_commission: Decimal,
    /// Base plus bonus commission.
    pub total_commission: Decimal,
}

impl CommissionTotals {
    /// Builds totals, deriving `total_commission`.
    pub fn new(
        total_sales: Decimal,
        minimum_sales_for_commission: Decimal,
        commission: Decimal,
        bonus_commission: Decimal,
    ) -> Self {
        Self {
            total_sales,
            minimum_sales_for_commission,
            commission,
            bonus_commission,
            total_commission: commission + bonus_commission,
        }
    }
}

/// The complete result of a commission calculation for one employee and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionStatement {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the statement.
    pub engine_version: String,
    /// The employee's full name.
    pub employee_name: String,
    /// The tier in effect when the statement was generated.
    pub tier: ExperienceTier,
    /// Number of sales recorded in the ledger.
    pub sales_count: usize,
    /// Number of sales discarded by the append policy.
    pub rejected_count: usize,
    /// Monetary totals.
    pub totals: CommissionTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
