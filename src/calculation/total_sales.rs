//! Total sales calculation functionality.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Ledger, SaleCategory};

/// The result of totalling a ledger, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalSalesResult {
    /// Sum of every recorded sale.
    pub total_sales: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Totals the ledger, independent of tier or thresholds.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::calculate_total_sales;
/// use commission_engine::models::{Ledger, SaleCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut ledger = Ledger::new();
/// ledger.append(SaleCategory::Basic, Decimal::from_str("1500.00").unwrap()).unwrap();
/// ledger.append(SaleCategory::Maintenance, Decimal::from_str("1000.00").unwrap()).unwrap();
///
/// let result = calculate_total_sales(&ledger, 1);
/// assert_eq!(result.total_sales, Decimal::from_str("2500.00").unwrap());
/// ```
pub fn calculate_total_sales(ledger: &Ledger, step_number: u32) -> TotalSalesResult {
    let total_sales = ledger.total_sales();

    let by_category: serde_json::Map<String, serde_json::Value> = SaleCategory::ALL
        .into_iter()
        .map(|category| {
            let subtotal: Decimal = ledger
                .iter()
                .filter(|t| t.category() == category)
                .map(|t| t.amount())
                .sum();
            (
                category.as_str().to_string(),
                serde_json::Value::String(subtotal.normalize().to_string()),
            )
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_sales".to_string(),
        rule_name: "Total Sales".to_string(),
        input: serde_json::json!({
            "sales_count": ledger.len()
        }),
        output: serde_json::json!({
            "total_sales": total_sales.normalize().to_string(),
            "by_category": by_category
        }),
        reasoning: format!(
            "{} sales totalling ${}",
            ledger.len(),
            total_sales.normalize()
        ),
    };

    TotalSalesResult {
        total_sales,
        audit_step,
    }
}
