//! Cost roll-up: materials + labour into a total with an itemized breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{InventoryItemId, ValueObject};

use crate::bom::BomLine;
use crate::labour::LabourLine;

/// Sum of per-line material costs. Zero for an empty BOM.
pub fn material_cost(lines: &[BomLine]) -> Decimal {
    lines.iter().map(BomLine::cost).sum()
}

/// Sum of per-line labour costs. Zero for an empty list.
pub fn labour_cost(lines: &[LabourLine]) -> Decimal {
    lines.iter().map(LabourLine::cost).sum()
}

/// `material_cost + labour_cost`.
pub fn total_cost(bom: &[BomLine], labour: &[LabourLine]) -> Decimal {
    material_cost(bom) + labour_cost(labour)
}

/// Per-line material detail: the line's fields plus how it was priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLineDetail {
    pub inventory_item_id: InventoryItemId,
    pub quantity: Decimal,
    pub uom: String,
    /// Effective unit cost the line was priced at.
    pub unit_cost: Decimal,
    pub wastage_multiplier: Decimal,
    pub cost: Decimal,
    /// The line priced at the zero default (no override, item uncosted).
    pub cost_missing: bool,
}

/// Per-line labour detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourLineDetail {
    pub labour_type: String,
    pub rate: Decimal,
    pub qty: Decimal,
    pub cost: Decimal,
}

/// Itemized roll-up of a design's cost of goods.
///
/// Ephemeral: recomputed on demand from the current lines and item costs.
/// Field names serialize camelCase to match the breakdown JSON the costing
/// screens consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub labour_cost: Decimal,
    pub total_cost: Decimal,
    pub materials: Vec<MaterialLineDetail>,
    pub labour: Vec<LabourLineDetail>,
    /// At least one material line priced at the zero default. Surface as
    /// "incomplete costing" rather than trusting the total.
    pub incomplete: bool,
}

impl ValueObject for CostBreakdown {}

/// Roll the given lines up into an itemized breakdown.
///
/// Deterministic in the given line order: callers pass lines in their
/// stored `sort_order`, and re-running with identical inputs yields an
/// identical breakdown.
pub fn cost_breakdown(bom: &[BomLine], labour: &[LabourLine]) -> CostBreakdown {
    let materials: Vec<MaterialLineDetail> = bom
        .iter()
        .map(|line| MaterialLineDetail {
            inventory_item_id: line.inventory_item_id,
            quantity: line.quantity,
            uom: line.uom.clone(),
            unit_cost: line.effective_unit_cost(),
            wastage_multiplier: line.wastage_multiplier(),
            cost: line.cost(),
            cost_missing: line.cost_missing(),
        })
        .collect();

    let labour_details: Vec<LabourLineDetail> = labour
        .iter()
        .map(|line| LabourLineDetail {
            labour_type: line.labour_type.clone(),
            rate: line.rate,
            qty: line.qty,
            cost: line.cost(),
        })
        .collect();

    let material_total: Decimal = materials.iter().map(|d| d.cost).sum();
    let labour_total: Decimal = labour_details.iter().map(|d| d.cost).sum();

    CostBreakdown {
        material_cost: material_total,
        labour_cost: labour_total,
        total_cost: material_total + labour_total,
        incomplete: materials.iter().any(|d| d.cost_missing),
        materials,
        labour: labour_details,
    }
}
