//! Core data models for the Commission Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod ledger;
mod transaction;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CommissionStatement, CommissionTotals, SaleAllocation,
};
pub use employee::{EmployeeName, ExperienceTier, MIN_NAME_PART_LEN};
pub use ledger::Ledger;
pub use transaction::{DEFAULT_MAX_SALE_AMOUNT, SALE_AMOUNT_CEILING, SaleCategory, Transaction};
