use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    bed::{Bed, GardenPath, Surface},
    materials::PriceTable,
    plant::{PlantPlacement, SunExposure, WaterRequirement},
    rotation::{RotationEntry, Season},
};

/// Rough footprint of the site, as answered in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Shape {
    Rectangular,
    Square,
    Irregular,
}

/// Wizard input for the layout generator.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub total_area_sq_ft: f64,
    /// Fraction of the total area actually plantable, in (0, 1].
    pub usable_fraction: f64,
    pub shape: Shape,
    pub surface: Surface,
    pub water_access: bool,
    pub sun_exposure: SunExposure,
    #[serde(default)]
    pub slope_pct: f64,
    #[serde(default)]
    pub accessibility_needs: bool,
}

/// Beds and paths produced by the layout generator, plus everything the
/// wizard surfaces to the user about the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub beds: Vec<Bed>,
    pub paths: Vec<GardenPath>,
    pub total_bed_area_sq_ft: f64,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Input for the rotation scheduler. Beds come from a previously generated
/// layout; crops are ids into the plant catalogue, in preference order.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationRequest {
    pub beds: Vec<Bed>,
    pub start_season: Season,
    pub start_year: i32,
    pub seasons_to_plan: u32,
    pub preferred_crops: Vec<String>,
    #[serde(default)]
    pub avoid_families: Vec<String>,
    pub sun_exposure: Option<SunExposure>,
    pub last_frost_date: Option<NaiveDate>,
    pub first_frost_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationPlan {
    pub plantings: Vec<RotationEntry>,
    pub warnings: Vec<String>,
}

/// Input for the materials estimator. When `prices` is omitted the built-in
/// price table applies.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsRequest {
    pub beds: Vec<Bed>,
    pub surface: Surface,
    pub drip_allowed: bool,
    pub prices: Option<PriceTable>,
}

/// Input for the companion analyzer: plants already placed on the site.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionRequest {
    pub placements: Vec<PlantPlacement>,
    /// When set, only relationships involving this plant are reported.
    pub focus_plant_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum RelationKind {
    Beneficial,
    Antagonistic,
}

/// A classified pairwise interaction between two placed plants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub a: String,
    pub b: String,
    pub kind: RelationKind,
    pub distance_in: f64,
}

/// Group verdict over a set of placements. The aggregate water/sun
/// requirements are the plurality across the group; they are absent when no
/// placement resolved to a known plant.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionReport {
    pub compatible: bool,
    pub relationships: Vec<Relationship>,
    pub warnings: Vec<String>,
    pub benefits: Vec<String>,
    pub water_requirement: Option<WaterRequirement>,
    pub sun_requirement: Option<SunExposure>,
}

/// Companion partner of a catalogue plant, as returned by the plants API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionsResponse {
    pub id: String,
    pub name: String,
    pub beneficial: Vec<CompanionInfo>,
    pub antagonistic: Vec<CompanionInfo>,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
