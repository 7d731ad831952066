use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Low/high price bracket, in the caller's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

impl CostRange {
    pub const ZERO: CostRange = CostRange {
        low: 0.0,
        high: 0.0,
    };

    pub fn scaled(self, quantity: f64) -> CostRange {
        CostRange {
            low: self.low * quantity,
            high: self.high * quantity,
        }
    }

    pub fn plus(self, other: CostRange) -> CostRange {
        CostRange {
            low: self.low + other.low,
            high: self.high + other.high,
        }
    }
}

/// Low/high unit prices per material category. Supplied by the caller so
/// pricing can vary by region without touching engine code; a default table
/// ships in [`crate::data::prices`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub soil_per_cu_ft: CostRange,
    pub compost_per_cu_ft: CostRange,
    pub mulch_per_cu_ft: CostRange,
    pub lumber_per_board_foot: CostRange,
    pub screw_each: CostRange,
    pub irrigation_line_per_ft: CostRange,
    pub emitter_each: CostRange,
    pub liner_per_sq_ft: CostRange,
}

/// Stateless aggregate over a bed set. Always recomputed from the beds,
/// never mutated independently. Every quantity is present even when zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsEstimate {
    pub soil_cu_ft: f64,
    pub compost_cu_ft: f64,
    pub mulch_cu_ft: f64,
    pub lumber_board_feet: f64,
    pub board_count: u32,
    pub screw_count: u32,
    pub irrigation_line_ft: f64,
    pub emitter_count: u32,
    /// Reservoir liner for wicking beds, square feet of bed footprint.
    pub liner_sq_ft: f64,
    pub cost: CostRange,
    pub notes: Vec<String>,
}
