//! Calculation logic for the Commission Engine.
//!
//! This module contains the pure calculation functions: totalling a ledger,
//! allocating sales against a running-total threshold, and the base and
//! bonus commission passes built on that allocation.

mod base_commission;
mod bonus_commission;
mod threshold;
mod total_sales;

pub use base_commission::{CommissionResult, calculate_commission};
pub use bonus_commission::calculate_bonus_commission;
pub use threshold::{ThresholdAllocation, allocate_against_threshold};
pub use total_sales::{TotalSalesResult, calculate_total_sales};
