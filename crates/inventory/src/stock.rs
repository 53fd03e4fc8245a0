//! Stock vocabulary shared by valuation and availability.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{Entity, InventoryItemId, JobCardId, LocationId, SupplierId, UserId, ValueObject};

/// Inventory item master data relevant to valuation.
///
/// `weighted_avg_cost` is the item's current blended unit cost. It changes
/// only when the caller persists a [`ReceiptOutcome`](crate::ReceiptOutcome);
/// nothing in this crate writes it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    /// Unit of measure the item is stocked and costed in (e.g. "m", "pcs").
    pub uom: String,
    /// Current blended unit cost. Never negative.
    pub weighted_avg_cost: Decimal,
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Stock snapshot for one (item, location) pair.
///
/// `reserved_quantity` is stock earmarked for existing job cards. It stays
/// at or below `quantity` in the steady state; transient overshoot is
/// tolerated, which is why availability is floored at zero rather than
/// assumed non-negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub quantity: Decimal,
    pub reserved_quantity: Decimal,
}

impl StockLevel {
    /// Snapshot for a location that has never held the item.
    pub fn empty() -> Self {
        Self {
            quantity: Decimal::ZERO,
            reserved_quantity: Decimal::ZERO,
        }
    }

    pub fn new(quantity: Decimal, reserved_quantity: Decimal) -> Self {
        Self {
            quantity,
            reserved_quantity,
        }
    }
}

impl ValueObject for StockLevel {}

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Goods receipt against a supplier delivery (GRN).
    Receipt,
    /// Issue to production or sale.
    Issue,
}

/// What a movement traces back to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementRef {
    Supplier(SupplierId),
    JobCard(JobCardId),
}

/// Movement record for the caller to persist alongside the stock update.
///
/// Issue quantities are recorded negative and receipts positive, so a plain
/// sum over an item's movements reproduces its on-hand quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub movement_type: MovementType,
    pub inventory_item_id: InventoryItemId,
    pub location_id: LocationId,
    /// Signed quantity in the item's UOM.
    pub quantity: Decimal,
    /// Unit cost carried by this movement: the received cost for receipts,
    /// the blended cost at issue time for issues.
    pub unit_cost: Decimal,
    pub reference: Option<MovementRef>,
    pub actor: UserId,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ValueObject for StockMovement {}
