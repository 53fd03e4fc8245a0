//! Inventory domain module.
//!
//! This crate contains the business rules for stock valuation and issuance,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Every function reads an immutable snapshot and returns the
//! values the caller must persist; serializing concurrent receipts and
//! issues for the same (item, location) is the storage layer's job.

pub mod availability;
pub mod stock;
pub mod valuation;

pub use availability::{
    available_quantity, check_issue, is_available, issue, IssueDecision, IssueOutcome, IssueRequest,
};
pub use stock::{InventoryItem, MovementRef, MovementType, StockLevel, StockMovement};
pub use valuation::{receive, weighted_average_cost, GoodsReceipt, ReceiptOutcome};
