//! Bill-of-materials lines and per-line material cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{InventoryItemId, ValueObject};

/// One material line of a design's BOM.
///
/// The line references an inventory item; it does not own it. At evaluation
/// time the caller joins in the item's current `weighted_avg_cost`, so a
/// roll-up always prices materials as of the moment it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub inventory_item_id: InventoryItemId,
    /// Quantity consumed per unit produced, before wastage.
    pub quantity: Decimal,
    pub uom: String,
    /// Material lost during production, as a percentage (0–100, default 0).
    #[serde(default)]
    pub wastage_pct: Decimal,
    /// Manual unit cost superseding the item's weighted-average cost for
    /// this line only.
    pub cost_override: Option<Decimal>,
    /// The referenced item's current weighted-average cost, if the item has
    /// ever been costed.
    pub weighted_avg_cost: Option<Decimal>,
    #[serde(default)]
    pub sort_order: i32,
}

impl BomLine {
    /// Unit cost used for this line: `cost_override ?? weighted_avg_cost ?? 0`.
    ///
    /// An unknown cost deliberately prices as free rather than failing, so
    /// a roll-up never crashes on an incomplete catalog entry; see
    /// [`cost_missing`](Self::cost_missing) for surfacing that.
    pub fn effective_unit_cost(&self) -> Decimal {
        self.cost_override
            .or(self.weighted_avg_cost)
            .unwrap_or(Decimal::ZERO)
    }

    /// True when the line has neither an override nor an item cost and so
    /// priced at the zero default.
    pub fn cost_missing(&self) -> bool {
        self.cost_override.is_none() && self.weighted_avg_cost.is_none()
    }

    /// Consumption inflation factor: `1 + wastage_pct / 100`.
    pub fn wastage_multiplier(&self) -> Decimal {
        Decimal::ONE + self.wastage_pct / Decimal::ONE_HUNDRED
    }

    /// `quantity × wastage multiplier × effective unit cost`.
    pub fn cost(&self) -> Decimal {
        self.quantity * self.wastage_multiplier() * self.effective_unit_cost()
    }
}

impl ValueObject for BomLine {}
