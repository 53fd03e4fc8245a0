//! Weighted-average inventory valuation.
//!
//! A goods receipt blends the incoming cost into the item's running
//! weighted-average cost. The functions here only compute the post-receipt
//! values; the caller commits the new cost, the incremented stock level and
//! the movement record in a single transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{DomainError, DomainResult, LocationId, SupplierId, UserId};

use crate::stock::{InventoryItem, MovementRef, MovementType, StockLevel, StockMovement};

/// New blended unit cost after receiving `new_qty` units at `new_cost`.
///
/// `(old_qty × old_cost + new_qty × new_cost) / (old_qty + new_qty)`,
/// defined as zero when both quantities are zero: no stock, no meaningful
/// cost. Inputs are assumed non-negative.
pub fn weighted_average_cost(
    old_qty: Decimal,
    old_cost: Decimal,
    new_qty: Decimal,
    new_cost: Decimal,
) -> Decimal {
    let total_qty = old_qty + new_qty;
    if total_qty.is_zero() {
        return Decimal::ZERO;
    }
    (old_qty * old_cost + new_qty * new_cost) / total_qty
}

/// Command: receive stock against a supplier delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsReceipt {
    pub location_id: LocationId,
    pub quantity: Decimal,
    /// Unit cost on the delivery, in the item's UOM.
    pub unit_cost: Decimal,
    pub supplier_id: Option<SupplierId>,
    pub received_by: UserId,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the caller must persist atomically after a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptOutcome {
    /// Goes onto the item, replacing `weighted_avg_cost`.
    pub new_weighted_avg_cost: Decimal,
    /// Goes onto the (item, location) stock level.
    pub new_on_hand: Decimal,
    pub movement: StockMovement,
}

/// Compute the post-receipt valuation for `item` at one location.
///
/// `stock` is the current snapshot for (item, location); `None` means the
/// location has never held the item, and the stock level to insert starts
/// with no reservation.
pub fn receive(
    item: &InventoryItem,
    stock: Option<StockLevel>,
    receipt: &GoodsReceipt,
) -> DomainResult<ReceiptOutcome> {
    if receipt.quantity.is_sign_negative() || receipt.unit_cost.is_sign_negative() {
        return Err(DomainError::validation(
            "receipt quantity and unit cost must be non-negative",
        ));
    }

    let stock = stock.unwrap_or_else(StockLevel::empty);
    let new_weighted_avg_cost = weighted_average_cost(
        stock.quantity,
        item.weighted_avg_cost,
        receipt.quantity,
        receipt.unit_cost,
    );

    tracing::debug!(
        item = %item.id,
        location = %receipt.location_id,
        quantity = %receipt.quantity,
        unit_cost = %receipt.unit_cost,
        new_weighted_avg_cost = %new_weighted_avg_cost,
        "goods receipt valued"
    );

    Ok(ReceiptOutcome {
        new_weighted_avg_cost,
        new_on_hand: stock.quantity + receipt.quantity,
        movement: StockMovement {
            movement_type: MovementType::Receipt,
            inventory_item_id: item.id,
            location_id: receipt.location_id,
            quantity: receipt.quantity,
            unit_cost: receipt.unit_cost,
            reference: receipt.supplier_id.map(MovementRef::Supplier),
            actor: receipt.received_by,
            notes: receipt.notes.clone(),
            occurred_at: receipt.occurred_at,
        },
    })
}
