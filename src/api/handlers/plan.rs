use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    data::{plants::builtin_catalog, prices::default_price_table},
    error::EngineError,
    logic::{
        companion::analyze_companions, layout::generate_layout, materials::estimate_materials,
        rotation::plan_rotation,
    },
    models::materials::MaterialsEstimate,
    models::request::{
        CompanionReport, CompanionRequest, ErrorResponse, LayoutPlan, LayoutRequest,
        MaterialsRequest, RotationPlan, RotationRequest,
    },
};

fn engine_error_response(err: &EngineError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        EngineError::InvalidInput { .. } => HttpResponse::BadRequest().json(body),
        // A generator defect, not a caller mistake.
        EngineError::LayoutInvariant(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// POST /api/layout
/// Generates a bed and path layout from the wizard's site answers.
#[utoipa::path(
    context_path = "/api",
    tag = "plan",
    request_body = LayoutRequest,
    responses(
        (status = 200, description = "Generated layout", body = LayoutPlan),
        (status = 400, description = "Invalid site input", body = ErrorResponse)
    )
)]
#[post("/layout")]
pub async fn post_layout(body: web::Json<LayoutRequest>) -> impl Responder {
    match generate_layout(&body.into_inner()) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => engine_error_response(&e),
    }
}

/// POST /api/rotation
/// Builds a season-by-season planting schedule over an existing bed set.
#[utoipa::path(
    context_path = "/api",
    tag = "plan",
    request_body = RotationRequest,
    responses(
        (status = 200, description = "Rotation schedule", body = RotationPlan),
        (status = 400, description = "Invalid rotation input", body = ErrorResponse)
    )
)]
#[post("/rotation")]
pub async fn post_rotation(body: web::Json<RotationRequest>) -> impl Responder {
    let catalog = builtin_catalog();
    match plan_rotation(&body.into_inner(), &catalog) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => engine_error_response(&e),
    }
}

/// POST /api/materials
/// Estimates soil, lumber, irrigation and cost for an existing bed set.
/// Falls back to the built-in price table when none is supplied.
#[utoipa::path(
    context_path = "/api",
    tag = "plan",
    request_body = MaterialsRequest,
    responses(
        (status = 200, description = "Materials estimate", body = MaterialsEstimate)
    )
)]
#[post("/materials")]
pub async fn post_materials(body: web::Json<MaterialsRequest>) -> impl Responder {
    let request = body.into_inner();
    let prices = request.prices.unwrap_or_else(default_price_table);
    let estimate = estimate_materials(&request.beds, request.surface, request.drip_allowed, &prices);
    HttpResponse::Ok().json(estimate)
}

/// POST /api/companions
/// Analyzes pairwise companion relationships among placed plants.
#[utoipa::path(
    context_path = "/api",
    tag = "plan",
    request_body = CompanionRequest,
    responses(
        (status = 200, description = "Compatibility report", body = CompanionReport)
    )
)]
#[post("/companions")]
pub async fn post_companions(body: web::Json<CompanionRequest>) -> impl Responder {
    let request = body.into_inner();
    let catalog = builtin_catalog();
    let report = analyze_companions(
        &request.placements,
        &catalog,
        request.focus_plant_id.as_deref(),
    );
    HttpResponse::Ok().json(report)
}
