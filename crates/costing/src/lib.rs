//! Costing domain module.
//!
//! Rolls a design's bill of materials and labour steps up into a cost of
//! goods with an itemized breakdown, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). The caller joins in each BOM
//! line's current item cost and consumes the computed values; persisting a
//! roll-up as the design's official cost happens outside this crate.

pub mod bom;
pub mod labour;
pub mod margin;
pub mod rollup;
pub mod snapshot;

pub use bom::BomLine;
pub use labour::{LabourLine, LegacyLabourCosts};
pub use margin::{margin, MarginAnalysis};
pub use rollup::{
    cost_breakdown, labour_cost, material_cost, total_cost, CostBreakdown, LabourLineDetail,
    MaterialLineDetail,
};
pub use snapshot::CostSnapshot;
