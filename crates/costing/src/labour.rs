//! Labour lines and the legacy fixed-field adapter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::ValueObject;

/// One labour step of a design (cutting, embroidery, stitching, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourLine {
    /// Free-form step label.
    pub labour_type: String,
    /// Cost per unit of work.
    pub rate: Decimal,
    /// Units of work; defaults to one.
    #[serde(default = "default_qty")]
    pub qty: Decimal,
    pub notes: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_qty() -> Decimal {
    Decimal::ONE
}

impl LabourLine {
    /// `rate × qty`.
    pub fn cost(&self) -> Decimal {
        self.rate * self.qty
    }
}

impl ValueObject for LabourLine {}

/// Legacy labour-cost shape: one fixed amount per production step.
///
/// Older designs stored these four fields instead of a line list. The
/// conversion maps them onto ordinary labour lines at the boundary; the
/// roll-up engine itself only ever sees the list shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLabourCosts {
    pub cutting_cost: Decimal,
    pub embroidery_cost: Decimal,
    pub stitching_cost: Decimal,
    pub finishing_cost: Decimal,
}

impl From<LegacyLabourCosts> for Vec<LabourLine> {
    fn from(legacy: LegacyLabourCosts) -> Self {
        [
            ("cutting", legacy.cutting_cost),
            ("embroidery", legacy.embroidery_cost),
            ("stitching", legacy.stitching_cost),
            ("finishing", legacy.finishing_cost),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (labour_type, rate))| LabourLine {
            labour_type: labour_type.to_string(),
            rate,
            qty: Decimal::ONE,
            notes: None,
            sort_order: i as i32,
        })
        .collect()
    }
}
