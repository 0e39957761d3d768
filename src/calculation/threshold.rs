//! Running-total threshold allocation.
//!
//! Commission only accrues on sales once the period's cumulative sales reach
//! a threshold. This module walks a ledger in insertion order and splits each
//! sale into the portion at or below the threshold and the portion above it.
//! Both the base commission and the bonus commission are built on this pass.

use rust_decimal::Decimal;

use crate::models::{SaleAllocation, Transaction};

/// The result of allocating a sequence of sales against one threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdAllocation {
    /// The threshold the sales were allocated against.
    pub threshold: Decimal,
    /// One allocation per sale, in ledger order.
    pub allocations: Vec<SaleAllocation>,
    /// Cumulative sales after the final transaction.
    pub net_sales: Decimal,
    /// Sum of every `above_threshold` portion.
    pub commissionable_sales: Decimal,
}

/// Splits each sale around `threshold` using a shared running total.
///
/// For each sale, in order:
/// - if the running total has already reached the threshold, the whole sale
///   is above it;
/// - else if the sale takes the running total to or past the threshold, only
///   `(running + amount) - threshold` is above it;
/// - otherwise the whole sale is below it.
///
/// The full amount is added to the running total in every case.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::allocate_against_threshold;
/// use commission_engine::models::{Ledger, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut ledger = Ledger::new();
/// ledger.append(SaleCategory::Basic, Decimal::from_str("1500").unwrap()).unwrap();
/// ledger.append(SaleCategory::Maintenance, Decimal::from_str("1000").unwrap()).unwrap();
///
/// let result = allocate_against_threshold(ledger.transactions(), Decimal::from_str("2000").unwrap());
///
/// assert_eq!(result.allocations[0].above_threshold, Decimal::ZERO);
/// assert_eq!(result.allocations[1].below_threshold, Decimal::from_str("500").unwrap());
/// assert_eq!(result.allocations[1].above_threshold, Decimal::from_str("500").unwrap());
/// ```
pub fn allocate_against_threshold(
    transactions: &[Transaction],
    threshold: Decimal,
) -> ThresholdAllocation {
    let mut net_sales = Decimal::ZERO;
    let mut commissionable_sales = Decimal::ZERO;
    let mut allocations = Vec::with_capacity(transactions.len());

    for (index, transaction) in transactions.iter().enumerate() {
        let amount = transaction.amount();

        let above_threshold = if net_sales >= threshold {
            amount
        } else if net_sales + amount >= threshold {
            (net_sales + amount) - threshold
        } else {
            Decimal::ZERO
        };

        net_sales += amount;
        commissionable_sales += above_threshold;

        allocations.push(SaleAllocation {
            index,
            category: transaction.category(),
            amount,
            below_threshold: amount - above_threshold,
            above_threshold,
        });
    }

    ThresholdAllocation {
        threshold,
        allocations,
        net_sales,
        commissionable_sales,
    }
}
