use utoipa::OpenApi;

use crate::models::{
    bed::{Bed, GardenPath, Orientation, Surface},
    geometry::Rect,
    materials::{CostRange, MaterialsEstimate, PriceTable},
    plant::{
        MaturityRange, PlantPlacement, PlantProfile, SowingMethod, SunExposure, WaterRequirement,
    },
    request::{
        CompanionInfo, CompanionReport, CompanionRequest, CompanionsResponse, ErrorResponse,
        LayoutPlan, LayoutRequest, MaterialsRequest, RelationKind, Relationship, RotationPlan,
        RotationRequest, Shape,
    },
    rotation::{RotationEntry, Season},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Potager Planning Engine",
        description = "Garden planning engine: generate a physically valid bed layout from wizard answers, analyze companion planting compatibility, schedule multi-season crop rotations and estimate materials with a cost range.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_companions,
        crate::api::handlers::plan::post_layout,
        crate::api::handlers::plan::post_rotation,
        crate::api::handlers::plan::post_materials,
        crate::api::handlers::plan::post_companions,
    ),
    components(
        schemas(
            // Enums
            Orientation, Surface, Shape, Season, SunExposure, WaterRequirement,
            SowingMethod, RelationKind,
            // Geometry and beds
            Rect, Bed, GardenPath,
            // Plants
            MaturityRange, PlantProfile, PlantPlacement,
            // Layout
            LayoutRequest, LayoutPlan,
            // Rotation
            RotationRequest, RotationPlan, RotationEntry,
            // Materials
            MaterialsRequest, MaterialsEstimate, PriceTable, CostRange,
            // Companions
            CompanionRequest, CompanionReport, Relationship,
            CompanionInfo, CompanionsResponse,
            // Shared
            ErrorResponse,
        )
    ),
    tags(
        (name = "plants", description = "Plant catalogue — list and companion lookup"),
        (name = "plan",   description = "Planning engine — layout, rotation, materials, compatibility"),
    )
)]
pub struct ApiDoc;
