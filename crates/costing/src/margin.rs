//! Gross-margin analysis over a computed cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::ValueObject;

/// Margin of a selling price over a computed total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAnalysis {
    pub selling_price: Decimal,
    pub cost: Decimal,
    pub gross_margin: Decimal,
    /// `gross_margin / selling_price × 100`; `None` when the selling price
    /// is zero.
    pub gross_margin_pct: Option<Decimal>,
}

impl ValueObject for MarginAnalysis {}

/// `selling_price − cost`, with the percentage guarded for a zero price.
pub fn margin(selling_price: Decimal, cost: Decimal) -> MarginAnalysis {
    let gross_margin = selling_price - cost;
    let gross_margin_pct = if selling_price.is_zero() {
        None
    } else {
        Some(gross_margin / selling_price * Decimal::ONE_HUNDRED)
    };

    MarginAnalysis {
        selling_price,
        cost,
        gross_margin,
        gross_margin_pct,
    }
}
