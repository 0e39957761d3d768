//! Sale transaction model.
//!
//! This module contains the [`SaleCategory`] enum and the immutable
//! [`Transaction`] value recorded in a ledger.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default upper bound for a single sale amount.
pub const DEFAULT_MAX_SALE_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 2);

/// Hard ceiling on any configured sale maximum (1,000,000,000.00).
///
/// Keeps ledger sums far below `Decimal::MAX` for any realistic number of sales.
pub const SALE_AMOUNT_CEILING: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Represents the kind of item sold.
///
/// Each category carries its own commission rate within a tier.
///
/// # Example
///
/// ```
/// use commission_engine::models::SaleCategory;
///
/// let category: SaleCategory = "maintenance".parse().unwrap();
/// assert_eq!(category, SaleCategory::Maintenance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleCategory {
    /// Basic item sale.
    Basic,
    /// Maintenance contract sale.
    Maintenance,
    /// Replacement part sale.
    Replacement,
    /// Consulting service sale.
    Consulting,
}

impl SaleCategory {
    /// All categories, in legacy code order.
    pub const ALL: [SaleCategory; 4] = [
        SaleCategory::Basic,
        SaleCategory::Maintenance,
        SaleCategory::Replacement,
        SaleCategory::Consulting,
    ];

    /// Returns the snake_case name used in configuration and statements.
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleCategory::Basic => "basic",
            SaleCategory::Maintenance => "maintenance",
            SaleCategory::Replacement => "replacement",
            SaleCategory::Consulting => "consulting",
        }
    }
}

impl fmt::Display for SaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a legacy integer code (`0` basic through `3` consulting).
impl TryFrom<i32> for SaleCategory {
    type Error = EngineError;

    fn try_from(code: i32) -> EngineResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| SaleCategory::ALL.get(index).copied())
            .ok_or_else(|| EngineError::InvalidCategory {
                value: code.to_string(),
            })
    }
}

impl FromStr for SaleCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let wanted = s.trim().to_lowercase();
        SaleCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| EngineError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

/// A single recorded sale.
///
/// Transactions can only be built through [`Transaction::new`], so every
/// value in a ledger satisfies the amount bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    category: SaleCategory,
    amount: Decimal,
}

impl Transaction {
    /// Creates a transaction, checking `0.00 <= amount <= max_amount`.
    ///
    /// `max_amount` is capped at [`SALE_AMOUNT_CEILING`].
    ///
    /// # Examples
    ///
    /// ```
    /// use commission_engine::models::{SaleCategory, Transaction, DEFAULT_MAX_SALE_AMOUNT};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let ok = Transaction::new(
    ///     SaleCategory::Basic,
    ///     Decimal::from_str("1500.00").unwrap(),
    ///     DEFAULT_MAX_SALE_AMOUNT,
    /// );
    /// assert!(ok.is_ok());
    ///
    /// let too_big = Transaction::new(
    ///     SaleCategory::Basic,
    ///     Decimal::from_str("150000.00").unwrap(),
    ///     DEFAULT_MAX_SALE_AMOUNT,
    /// );
    /// assert!(too_big.is_err());
    /// ```
    pub fn new(category: SaleCategory, amount: Decimal, max_amount: Decimal) -> EngineResult<Self> {
        let max_amount = max_amount.min(SALE_AMOUNT_CEILING);
        if amount < Decimal::ZERO || amount > max_amount {
            return Err(EngineError::InvalidAmount {
                amount,
                max: max_amount,
            });
        }

        Ok(Self { category, amount })
    }

    /// Returns the sale category.
    pub fn category(&self) -> SaleCategory {
        self.category
    }

    /// Returns the sale amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_max_sale_amount() {
        assert_eq!(DEFAULT_MAX_SALE_AMOUNT, dec("100000.00"));
    }

    #[test]
    fn test_max_amount_capped_at_ceiling() {
        assert!(Transaction::new(SaleCategory::Basic, SALE_AMOUNT_CEILING, Decimal::MAX).is_ok());

        match Transaction::new(SaleCategory::Basic, Decimal::MAX, Decimal::MAX) {
            Err(EngineError::InvalidAmount { max, .. }) => {
                assert_eq!(max, dec("1000000000"));
            }
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_category_from_legacy_code() {
        assert_eq!(SaleCategory::try_from(0).unwrap(), SaleCategory::Basic);
        assert_eq!(SaleCategory::try_from(1).unwrap(), SaleCategory::Maintenance);
        assert_eq!(SaleCategory::try_from(2).unwrap(), SaleCategory::Replacement);
        assert_eq!(SaleCategory::try_from(3).unwrap(), SaleCategory::Consulting);
    }

    #[test]
    fn test_category_from_unknown_code() {
        for code in [-1, 4, i32::MAX] {
            match SaleCategory::try_from(code) {
                Err(EngineError::InvalidCategory { value }) => assert_eq!(value, code.to_string()),
                _ => panic!("Expected InvalidCategory error for {}", code),
            }
        }
    }

    #[test]
    fn test_category_from_str_is_case_insensitive() {
        assert_eq!(
            " Consulting ".parse::<SaleCategory>().unwrap(),
            SaleCategory::Consulting
        );
        assert!("warranty".parse::<SaleCategory>().is_err());
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&SaleCategory::Replacement).unwrap(),
            "\"replacement\""
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let tx = Transaction::new(SaleCategory::Basic, dec("0.00"), DEFAULT_MAX_SALE_AMOUNT).unwrap();
        assert_eq!(tx.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_max_amount_is_valid() {
        let tx = Transaction::new(
            SaleCategory::Consulting,
            dec("100000.00"),
            DEFAULT_MAX_SALE_AMOUNT,
        )
        .unwrap();
        assert_eq!(tx.category(), SaleCategory::Consulting);
        assert_eq!(tx.amount(), dec("100000.00"));
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let result = Transaction::new(SaleCategory::Basic, dec("-0.01"), DEFAULT_MAX_SALE_AMOUNT);
        match result {
            Err(EngineError::InvalidAmount { amount, max }) => {
                assert_eq!(amount, dec("-0.01"));
                assert_eq!(max, dec("100000.00"));
            }
            _ => panic!("Expected InvalidAmount error"),
        }
    }

    #[test]
    fn test_negative_zero_is_valid() {
        let negative_zero = -Decimal::ZERO;
        assert!(Transaction::new(SaleCategory::Basic, negative_zero, DEFAULT_MAX_SALE_AMOUNT).is_ok());
    }

    #[test]
    fn test_amount_above_max_is_invalid() {
        let result = Transaction::new(
            SaleCategory::Basic,
            dec("100000.01"),
            DEFAULT_MAX_SALE_AMOUNT,
        );
        assert!(matches!(result, Err(EngineError::InvalidAmount { .. })));
    }

    #[test]
    fn test_custom_max_amount() {
        assert!(Transaction::new(SaleCategory::Basic, dec("600"), dec("500")).is_err());
        assert!(Transaction::new(SaleCategory::Basic, dec("500"), dec("500")).is_ok());
    }
}
