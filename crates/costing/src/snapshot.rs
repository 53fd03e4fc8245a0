//! Persistable audit snapshot of a computed cost.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{DesignId, UserId};

use crate::bom::BomLine;
use crate::labour::LabourLine;
use crate::rollup::{cost_breakdown, CostBreakdown};

/// Audit record built when a roll-up is saved as a design's official cost.
///
/// The core only produces the value; a collaborator persists it together
/// with the design's `base_cost_price` update in one transaction, so the
/// audit trail and the official cost can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSnapshot {
    pub design_id: DesignId,
    pub computed_cost: Decimal,
    pub breakdown: CostBreakdown,
    pub computed_by: UserId,
    pub computed_at: DateTime<Utc>,
}

impl CostSnapshot {
    /// Snapshot the roll-up of `bom` and `labour` for `design_id`.
    pub fn new(
        design_id: DesignId,
        computed_by: UserId,
        computed_at: DateTime<Utc>,
        bom: &[BomLine],
        labour: &[LabourLine],
    ) -> Self {
        let breakdown = cost_breakdown(bom, labour);
        Self {
            design_id,
            computed_cost: breakdown.total_cost,
            breakdown,
            computed_by,
            computed_at,
        }
    }
}
