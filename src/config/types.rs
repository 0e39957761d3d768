//! Configuration types for commission calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the built-in
//! default rate table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DEFAULT_MAX_SALE_AMOUNT, SALE_AMOUNT_CEILING, ExperienceTier, SaleCategory};

/// Commission rate for each sale category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRates {
    /// Rate applied to basic item sales.
    pub basic: Decimal,
    /// Rate applied to maintenance sales.
    pub maintenance: Decimal,
    /// Rate applied to replacement sales.
    pub replacement: Decimal,
    /// Rate applied to consulting sales.
    pub consulting: Decimal,
}

impl CategoryRates {
    /// Returns the rate for a category.
    pub fn rate_for(&self, category: SaleCategory) -> Decimal {
        match category {
            SaleCategory::Basic => self.basic,
            SaleCategory::Maintenance => self.maintenance,
            SaleCategory::Replacement => self.replacement,
            SaleCategory::Consulting => self.consulting,
        }
    }
}

/// Rates and thresholds for one experience tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Per-category base commission rates.
    pub rates: CategoryRates,
    /// Cumulative sales required before base commission accrues.
    pub minimum_sales_for_commission: Decimal,
    /// Cumulative sales required before bonus commission accrues.
    pub minimum_sales_for_bonus: Decimal,
    /// Flat rate applied to sales above the bonus threshold.
    pub bonus_rate: Decimal,
}

impl TierConfig {
    /// Probationary defaults.
    pub fn probationary() -> Self {
        Self {
            rates: CategoryRates {
                basic: Decimal::new(2, 2),
                maintenance: Decimal::new(3, 2),
                replacement: Decimal::new(1, 2),
                consulting: Decimal::new(3, 2),
            },
            minimum_sales_for_commission: Decimal::new(200_000, 2),
            minimum_sales_for_bonus: Decimal::new(5_000_000, 2),
            bonus_rate: Decimal::new(5, 3),
        }
    }

    /// Experienced defaults.
    pub fn experienced() -> Self {
        Self {
            rates: CategoryRates {
                basic: Decimal::new(4, 2),
                maintenance: Decimal::new(6, 2),
                replacement: Decimal::new(15, 3),
                consulting: Decimal::new(8, 2),
            },
            minimum_sales_for_commission: Decimal::new(500_000, 2),
            minimum_sales_for_bonus: Decimal::new(10_000_000, 2),
            bonus_rate: Decimal::new(15, 3),
        }
    }

    fn validate(&self, tier: ExperienceTier) -> EngineResult<()> {
        let fields = [
            ("rates.basic", self.rates.basic),
            ("rates.maintenance", self.rates.maintenance),
            ("rates.replacement", self.rates.replacement),
            ("rates.consulting", self.rates.consulting),
            ("minimum_sales_for_commission", self.minimum_sales_for_commission),
            ("minimum_sales_for_bonus", self.minimum_sales_for_bonus),
            ("bonus_rate", self.bonus_rate),
        ];

        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: format!("{}.{}", tier, field),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        // Rates are fractions of a sale.
        let rates = [
            ("rates.basic", self.rates.basic),
            ("rates.maintenance", self.rates.maintenance),
            ("rates.replacement", self.rates.replacement),
            ("rates.consulting", self.rates.consulting),
            ("bonus_rate", self.bonus_rate),
        ];

        for (field, value) in rates {
            if value > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: format!("{}.{}", tier, field),
                    message: format!("must not exceed 1, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Sales limits from limits.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// The largest amount a single sale may have.
    pub max_sale_amount: Decimal,
}

/// Tier tables from tiers.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiersConfig {
    /// Probationary tier record.
    pub probationary: TierConfig,
    /// Experienced tier record.
    pub experienced: TierConfig,
}

/// The complete commission configuration.
///
/// Holds one independently configured [`TierConfig`] per tier, so no tier
/// ever borrows another tier's threshold.
///
/// # Example
///
/// ```
/// use commission_engine::config::CommissionConfig;
/// use commission_engine::models::{ExperienceTier, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = CommissionConfig::default();
/// let tier = config.tier(ExperienceTier::Experienced);
/// assert_eq!(tier.minimum_sales_for_commission, Decimal::from_str("5000.00").unwrap());
/// assert_eq!(tier.rates.rate_for(SaleCategory::Consulting), Decimal::from_str("0.08").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionConfig {
    max_sale_amount: Decimal,
    probationary: TierConfig,
    experienced: TierConfig,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            max_sale_amount: DEFAULT_MAX_SALE_AMOUNT,
            probationary: TierConfig::probationary(),
            experienced: TierConfig::experienced(),
        }
    }
}

impl CommissionConfig {
    /// Creates a validated configuration from its component parts.
    ///
    /// Fails with `InvalidConfig` if the maximum sale amount is not positive
    /// or exceeds [`SALE_AMOUNT_CEILING`], if any rate or threshold is
    /// negative, or if any rate is above 1.
    pub fn new(limits: LimitsConfig, tiers: TiersConfig) -> EngineResult<Self> {
        if limits.max_sale_amount <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "max_sale_amount".to_string(),
                message: format!("must be positive, got {}", limits.max_sale_amount),
            });
        }

        if limits.max_sale_amount > SALE_AMOUNT_CEILING {
            return Err(EngineError::InvalidConfig {
                field: "max_sale_amount".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    SALE_AMOUNT_CEILING, limits.max_sale_amount
                ),
            });
        }

        tiers.probationary.validate(ExperienceTier::Probationary)?;
        tiers.experienced.validate(ExperienceTier::Experienced)?;

        Ok(Self {
            max_sale_amount: limits.max_sale_amount,
            probationary: tiers.probationary,
            experienced: tiers.experienced,
        })
    }

    /// Returns the record for a tier.
    pub fn tier(&self, tier: ExperienceTier) -> &TierConfig {
        match tier {
            ExperienceTier::Probationary => &self.probationary,
            ExperienceTier::Experienced => &self.experienced,
        }
    }

    /// Returns the tier's base commission threshold.
    pub fn minimum_sales_for_commission(&self, tier: ExperienceTier) -> Decimal {
        self.tier(tier).minimum_sales_for_commission
    }

    /// Returns the largest amount a single sale may have.
    pub fn max_sale_amount(&self) -> Decimal {
        self.max_sale_amount
    }
}
