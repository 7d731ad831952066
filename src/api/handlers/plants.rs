use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    data::plants::{all_profiles, get_plant_by_id},
    models::plant::PlantProfile,
    models::request::{CompanionInfo, CompanionsResponse, ErrorResponse},
};

/// GET /api/plants
/// Returns the built-in plant catalogue.
#[utoipa::path(
    context_path = "/api",
    tag = "plants",
    responses((status = 200, description = "All catalogue plants", body = [PlantProfile]))
)]
#[get("/plants")]
pub async fn list_plants() -> impl Responder {
    HttpResponse::Ok().json(all_profiles())
}

/// GET /api/plants/{id}/companions
/// Returns beneficial and antagonistic partners for a given plant.
#[utoipa::path(
    context_path = "/api",
    tag = "plants",
    responses(
        (status = 200, description = "Companion partners", body = CompanionsResponse),
        (status = 404, description = "Unknown plant id", body = ErrorResponse)
    )
)]
#[get("/plants/{id}/companions")]
pub async fn get_companions(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let all = all_profiles();

    match get_plant_by_id(&id) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Plant '{}' not found.", id)
        })),
        Some(plant) => {
            let resolve = |ids: &[String]| -> Vec<CompanionInfo> {
                ids.iter()
                    .filter_map(|cid| {
                        all.iter().find(|p| &p.id == cid).map(|p| CompanionInfo {
                            id: p.id.clone(),
                            name: p.name.clone(),
                        })
                    })
                    .collect()
            };
            let beneficial = resolve(&plant.beneficial_with);
            let antagonistic = resolve(&plant.antagonistic_with);

            HttpResponse::Ok().json(CompanionsResponse {
                id: plant.id,
                name: plant.name,
                beneficial,
                antagonistic,
            })
        }
    }
}
