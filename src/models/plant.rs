use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum SunExposure {
    Full,
    Partial,
    Shade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum WaterRequirement {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum SowingMethod {
    DirectSow,
    Transplant,
}

/// Days from sowing (or transplanting) to first harvest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaturityRange {
    pub min: u32,
    pub max: u32,
}

/// One record of the plant knowledge base. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    pub id: String,
    pub name: String,
    /// Botanical family, the unit of rotation safety (e.g. "Solanaceae").
    pub family: String,
    pub sun_requirement: SunExposure,
    pub water_requirement: WaterRequirement,
    pub spacing_in: f64,
    pub days_to_maturity: MaturityRange,
    pub sowing: SowingMethod,
    pub beneficial_with: Vec<String>,
    pub antagonistic_with: Vec<String>,
}

/// A plant placed somewhere on the site. Positions are inches in the overall
/// site coordinate space, not bed-local, because proximity effects cross bed
/// boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantPlacement {
    pub plant_id: String,
    pub bed_id: String,
    pub x: f64,
    pub y: f64,
}

/// Immutable lookup over plant profiles, keyed by id. Passed explicitly into
/// every engine call so the engine stays pure and testable with synthetic
/// data sets.
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    plants: HashMap<String, PlantProfile>,
}

impl PlantCatalog {
    pub fn from_profiles(profiles: Vec<PlantProfile>) -> Self {
        let plants = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { plants }
    }

    pub fn get(&self, id: &str) -> Option<&PlantProfile> {
        self.plants.get(id)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
