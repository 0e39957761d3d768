//! Transaction ledger model.
//!
//! The [`Ledger`] is the ordered, append-only record of one employee's
//! sales for one period. Insertion order is significant: it is the order in
//! which the running total crosses commission thresholds.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;

use super::transaction::{DEFAULT_MAX_SALE_AMOUNT, SALE_AMOUNT_CEILING, SaleCategory, Transaction};

/// An ordered collection of validated sales.
///
/// # Example
///
/// ```
/// use commission_engine::models::{Ledger, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut ledger = Ledger::new();
/// ledger.append(SaleCategory::Basic, Decimal::from_str("1500.00").unwrap()).unwrap();
/// ledger.append(SaleCategory::Maintenance, Decimal::from_str("1000.00").unwrap()).unwrap();
///
/// assert_eq!(ledger.len(), 2);
/// assert_eq!(ledger.total_sales(), Decimal::from_str("2500.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    max_sale_amount: Decimal,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger using [`DEFAULT_MAX_SALE_AMOUNT`].
    pub fn new() -> Self {
        Self::with_max_sale_amount(DEFAULT_MAX_SALE_AMOUNT)
    }

    /// Creates an empty ledger that accepts sales up to `max_sale_amount`,
    /// capped at [`SALE_AMOUNT_CEILING`].
    pub fn with_max_sale_amount(max_sale_amount: Decimal) -> Self {
        Self {
            transactions: Vec::new(),
            max_sale_amount: max_sale_amount.min(SALE_AMOUNT_CEILING),
        }
    }

    /// Validates and appends a sale.
    ///
    /// Fails with [`InvalidAmount`](crate::error::EngineError::InvalidAmount)
    /// when the amount is negative or above the maximum; the ledger is left
    /// unchanged in that case.
    pub fn append(&mut self, category: SaleCategory, amount: Decimal) -> EngineResult<&Transaction> {
        let transaction = Transaction::new(category, amount, self.max_sale_amount)?;
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Returns the sum of every recorded amount.
    pub fn total_sales(&self) -> Decimal {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Returns the recorded transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Iterates over the recorded transactions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Returns the number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if no sales have been recorded.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns the largest amount a single sale may have.
    pub fn max_sale_amount(&self) -> Decimal {
        self.max_sale_amount
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
