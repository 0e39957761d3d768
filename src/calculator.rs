//! Employee commission context.
//!
//! [`CommissionCalculator`] owns one employee's ledger for one period along
//! with the employee's name, current tier, and the policy applied to invalid
//! sales. Every query recomputes from the full ledger using the tier in
//! effect at call time.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    CommissionResult, calculate_bonus_commission, calculate_commission, calculate_total_sales,
};
use crate::config::CommissionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, CommissionStatement, CommissionTotals, EmployeeName, ExperienceTier,
    Ledger, SaleCategory, Transaction,
};

/// What to do with a sale that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendPolicy {
    /// Return the validation error to the caller.
    #[default]
    Reject,
    /// Log the error, record it in [`CommissionCalculator::rejected_sales`],
    /// and report [`AppendOutcome::Discarded`].
    Discard,
}

/// The outcome of a sale accepted by the append policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The sale was appended to the ledger.
    Recorded(Transaction),
    /// The sale was invalid and dropped under [`AppendPolicy::Discard`].
    Discarded(EngineError),
}

impl AppendOutcome {
    /// Returns true if the sale reached the ledger.
    pub fn is_recorded(&self) -> bool {
        matches!(self, AppendOutcome::Recorded(_))
    }
}

/// A sale dropped under [`AppendPolicy::Discard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSale {
    /// The category as supplied, if it was valid.
    pub category: Option<SaleCategory>,
    /// The amount as supplied.
    pub amount: Decimal,
    /// Why the sale was rejected.
    pub error: EngineError,
}

/// Commission context for one employee and one period.
///
/// # Example
///
/// ```
/// use commission_engine::calculator::CommissionCalculator;
/// use commission_engine::models::{ExperienceTier, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut calc = CommissionCalculator::new("Grace Hopper", ExperienceTier::Probationary)?;
/// calc.add_sale(SaleCategory::Basic, Decimal::from_str("1500.00").unwrap())?;
/// calc.add_sale(SaleCategory::Maintenance, Decimal::from_str("1000.00").unwrap())?;
///
/// assert_eq!(calc.total_sales(), Decimal::from_str("2500.00").unwrap());
/// assert_eq!(calc.calculate_commission(), Decimal::from_str("15.00").unwrap());
/// assert_eq!(calc.calculate_bonus_commission(), Decimal::ZERO);
/// # Ok::<(), commission_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CommissionCalculator {
    name: EmployeeName,
    tier: ExperienceTier,
    config: CommissionConfig,
    policy: AppendPolicy,
    ledger: Ledger,
    rejected: Vec<RejectedSale>,
}

impl CommissionCalculator {
    /// Creates a context with the built-in configuration and
    /// [`AppendPolicy::Reject`].
    ///
    /// Fails with `InvalidName` if `name` is not a first and last name.
    pub fn new(name: &str, tier: ExperienceTier) -> EngineResult<Self> {
        Self::with_config(name, tier, CommissionConfig::default())
    }

    /// Creates a context using the given configuration.
    pub fn with_config(
        name: &str,
        tier: ExperienceTier,
        config: CommissionConfig,
    ) -> EngineResult<Self> {
        let name = EmployeeName::parse(name)?;
        let ledger = Ledger::with_max_sale_amount(config.max_sale_amount());

        Ok(Self {
            name,
            tier,
            config,
            policy: AppendPolicy::default(),
            ledger,
            rejected: Vec::new(),
        })
    }

    /// Sets the policy applied to invalid sales.
    pub fn with_append_policy(mut self, policy: AppendPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the employee's full name.
    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    /// Returns the tier currently in effect.
    pub fn experience_tier(&self) -> ExperienceTier {
        self.tier
    }

    /// Returns the policy applied to invalid sales.
    pub fn append_policy(&self) -> AppendPolicy {
        self.policy
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &CommissionConfig {
        &self.config
    }

    /// Returns the recorded sales.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns sales dropped under [`AppendPolicy::Discard`].
    pub fn rejected_sales(&self) -> &[RejectedSale] {
        &self.rejected
    }

    /// Changes the tier used by subsequent calculations.
    pub fn set_experience_tier(&mut self, tier: ExperienceTier) {
        if tier != self.tier {
            info!(
                employee = %self.name,
                from = %self.tier,
                to = %tier,
                "Experience tier changed"
            );
        }
        self.tier = tier;
    }

    /// Changes the tier from a legacy integer code.
    ///
    /// Fails with `InvalidTier` for an unknown code, leaving the tier as it was.
    pub fn set_experience_tier_code(&mut self, code: i32) -> EngineResult<()> {
        let tier = ExperienceTier::try_from(code)?;
        self.set_experience_tier(tier);
        Ok(())
    }

    /// Records a sale, applying the append policy on failure.
    ///
    /// Under [`AppendPolicy::Reject`] an invalid amount is returned as
    /// `Err(InvalidAmount)`. Under [`AppendPolicy::Discard`] it is returned as
    /// `Ok(AppendOutcome::Discarded(..))`. The ledger is unchanged either way.
    pub fn add_sale(&mut self, category: SaleCategory, amount: Decimal) -> EngineResult<AppendOutcome> {
        match self.ledger.append(category, amount).copied() {
            Ok(transaction) => {
                debug!(
                    employee = %self.name,
                    category = %category,
                    amount = %amount,
                    sales_count = self.ledger.len(),
                    "Sale recorded"
                );
                Ok(AppendOutcome::Recorded(transaction))
            }
            Err(err) => self.handle_rejection(Some(category), amount, err),
        }
    }

    /// Records a sale given a legacy integer category code.
    ///
    /// An unknown code raises `InvalidCategory`, which is subject to the
    /// append policy like any other validation failure.
    pub fn add_sale_code(&mut self, category_code: i32, amount: Decimal) -> EngineResult<AppendOutcome> {
        match SaleCategory::try_from(category_code) {
            Ok(category) => self.add_sale(category, amount),
            Err(err) => self.handle_rejection(None, amount, err),
        }
    }

    fn handle_rejection(
        &mut self,
        category: Option<SaleCategory>,
        amount: Decimal,
        err: EngineError,
    ) -> EngineResult<AppendOutcome> {
        match self.policy {
            AppendPolicy::Reject => Err(err),
            AppendPolicy::Discard => {
                warn!(
                    employee = %self.name,
                    amount = %amount,
                    error = %err,
                    "Invalid sale discarded"
                );
                self.rejected.push(RejectedSale {
                    category,
                    amount,
                    error: err.clone(),
                });
                Ok(AppendOutcome::Discarded(err))
            }
        }
    }

    /// Returns the sum of every recorded sale.
    pub fn total_sales(&self) -> Decimal {
        self.ledger.total_sales()
    }

    /// Returns the current tier's threshold before base commission accrues.
    pub fn minimum_sales_for_commission(&self) -> Decimal {
        self.config.minimum_sales_for_commission(self.tier)
    }

    /// Calculates the base commission under the current tier.
    pub fn calculate_commission(&self) -> Decimal {
        self.commission_detail().commission
    }

    /// Calculates the bonus commission under the current tier.
    pub fn calculate_bonus_commission(&self) -> Decimal {
        self.bonus_commission_detail().commission
    }

    /// Base commission with per-sale allocations and audit step.
    pub fn commission_detail(&self) -> CommissionResult {
        calculate_commission(&self.ledger, &self.config, self.tier, 1)
    }

    /// Bonus commission with per-sale allocations and audit step.
    pub fn bonus_commission_detail(&self) -> CommissionResult {
        calculate_bonus_commission(&self.ledger, &self.config, self.tier, 1)
    }

    /// Produces an audited statement of the current period.
    pub fn statement(&self) -> CommissionStatement {
        let start_time = Instant::now();
        let statement_id = Uuid::new_v4();
        let mut step_number: u32 = 1;

        let total = calculate_total_sales(&self.ledger, step_number);
        step_number += 1;

        let base = calculate_commission(&self.ledger, &self.config, self.tier, step_number);
        step_number += 1;

        let bonus = calculate_bonus_commission(&self.ledger, &self.config, self.tier, step_number);

        let warnings: Vec<AuditWarning> = self
            .rejected
            .iter()
            .map(|rejected| AuditWarning {
                code: "SALE_DISCARDED".to_string(),
                message: rejected.error.to_string(),
                severity: "medium".to_string(),
            })
            .collect();

        let totals = CommissionTotals::new(
            total.total_sales,
            base.threshold,
            base.commission,
            bonus.commission,
        );

        let duration = start_time.elapsed();
        info!(
            statement_id = %statement_id,
            employee = %self.name,
            tier = %self.tier,
            sales_count = self.ledger.len(),
            total_commission = %totals.total_commission,
            duration_us = duration.as_micros(),
            "Commission statement generated"
        );

        CommissionStatement {
            statement_id,
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_name: self.name.to_string(),
            tier: self.tier,
            sales_count: self.ledger.len(),
            rejected_count: self.rejected.len(),
            totals,
            audit_trace: AuditTrace {
                steps: vec![total.audit_step, base.audit_step, bonus.audit_step],
                warnings,
                duration_us: duration.as_micros() as u64,
            },
        }
    }
}
