use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::geometry::Rect;

/// Which way a bed's long axis runs. Rows of north-south beds get the most
/// even morning/afternoon sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Orientation {
    NorthSouth,
    EastWest,
}

/// What the beds stand on. Hard surfaces (concrete, pavers, decking) have no
/// ground-sourced capillary moisture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Surface {
    Soil,
    Hard,
}

/// A cultivated growing area. Created once per plan by the layout generator
/// and immutable afterwards; a re-run produces a new set of beds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: String,
    pub name: String,
    pub rect: Rect,
    /// Soil depth in inches, 6 to 36.
    pub height_in: f64,
    pub orientation: Orientation,
    pub surface: Surface,
    /// Self-watering reservoir bed. Always true on hard surfaces.
    pub wicking: bool,
    pub has_trellis: bool,
    /// Clearance kept free around this bed, in inches.
    pub path_clearance_in: f64,
}

/// A clearance strip between beds. 18 inches minimum, 36 when it must take
/// a wheelchair or walker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenPath {
    pub id: String,
    pub rect: Rect,
    pub width_in: f64,
    pub accessible: bool,
}
