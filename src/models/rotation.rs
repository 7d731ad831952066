use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::plant::SowingMethod;

/// Growing seasons in planning order: spring → summer → fall → winter →
/// next year's spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn index(self) -> i64 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

/// Absolute position of a `(year, season)` pair on the season axis, used for
/// rotation-window distances.
pub fn season_ordinal(year: i32, season: Season) -> i64 {
    i64::from(year) * 4 + season.index()
}

/// One scheduled planting: a crop in a bed for a given season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationEntry {
    pub bed_id: String,
    pub season: Season,
    pub year: i32,
    pub crop_id: String,
    pub family: String,
    pub spacing_in: f64,
    pub sowing_method: SowingMethod,
}
