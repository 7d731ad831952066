use actix_web::{test, web, App};
use potager::api::routes::configure;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

fn sample_bed() -> serde_json::Value {
    serde_json::json!({
        "id": "bed-1",
        "name": "Bed 1",
        "rect": { "x": 0.0, "y": 0.0, "width": 36.0, "height": 96.0 },
        "heightIn": 12.0,
        "orientation": "NorthSouth",
        "surface": "Soil",
        "wicking": false,
        "hasTrellis": false,
        "pathClearanceIn": 18.0
    })
}

// ---------------------------------------------------------------------------
// GET /api/plants
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_plants_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_plants_items_have_required_fields() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().expect("response must be a JSON array");
    assert!(!items.is_empty());
    for item in items {
        for field in [
            "id",
            "name",
            "family",
            "sunRequirement",
            "waterRequirement",
            "spacingIn",
            "daysToMaturity",
            "sowing",
            "beneficialWith",
            "antagonisticWith",
        ] {
            assert!(
                !item[field].is_null(),
                "each plant must have '{field}': {item}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// GET /api/plants/{id}/companions
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_companions_resolves_partners() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/tomato/companions")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], "tomato");
    let beneficial: Vec<&str> = body["beneficial"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert!(beneficial.contains(&"basil"));
    let antagonistic: Vec<&str> = body["antagonistic"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert!(antagonistic.contains(&"fennel"));
}

#[actix_web::test]
async fn test_get_companions_unknown_id_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/dragonfruit/companions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

// ---------------------------------------------------------------------------
// POST /api/layout
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_layout_generates_beds() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "totalAreaSqFt": 200.0,
        "usableFraction": 0.8,
        "shape": "Rectangular",
        "surface": "Soil",
        "waterAccess": true,
        "sunExposure": "Full",
        "slopePct": 0.0,
        "accessibilityNeeds": false
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let beds = body["beds"].as_array().unwrap();
    assert!(!beds.is_empty());
    assert!(body["totalBedAreaSqFt"].as_f64().unwrap() > 0.0);
}

#[actix_web::test]
async fn test_post_layout_rejects_non_positive_area() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "totalAreaSqFt": 0.0,
        "usableFraction": 0.8,
        "shape": "Rectangular",
        "surface": "Soil",
        "waterAccess": true,
        "sunExposure": "Full"
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("totalAreaSqFt"));
}

#[actix_web::test]
async fn test_post_layout_hard_surface_forces_wicking() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "totalAreaSqFt": 120.0,
        "usableFraction": 1.0,
        "shape": "Square",
        "surface": "Hard",
        "waterAccess": true,
        "sunExposure": "Full"
    });
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    for bed in body["beds"].as_array().unwrap() {
        assert_eq!(bed["wicking"], true);
    }
}

#[actix_web::test]
async fn test_post_layout_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/layout")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"totalAreaSqFt\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// POST /api/rotation
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_rotation_single_family_goes_fallow() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "beds": [sample_bed()],
        "startSeason": "Spring",
        "startYear": 2026,
        "seasonsToPlan": 3,
        "preferredCrops": ["tomato", "pepper"],
        "avoidFamilies": []
    });
    let req = test::TestRequest::post()
        .uri("/api/rotation")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    // One Solanaceae planting, then two fallow warnings.
    assert_eq!(body["plantings"].as_array().unwrap().len(), 1);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 2);
    assert_eq!(body["plantings"][0]["family"], "Solanaceae");
}

#[actix_web::test]
async fn test_post_rotation_rejects_inverted_frost_dates() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "beds": [sample_bed()],
        "startSeason": "Spring",
        "startYear": 2026,
        "seasonsToPlan": 2,
        "preferredCrops": ["tomato"],
        "lastFrostDate": "2026-10-15",
        "firstFrostDate": "2026-05-01"
    });
    let req = test::TestRequest::post()
        .uri("/api/rotation")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// POST /api/materials
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_materials_uses_default_prices() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "beds": [sample_bed()],
        "surface": "Soil",
        "dripAllowed": true
    });
    let req = test::TestRequest::post()
        .uri("/api/materials")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["soilCuFt"].as_f64().unwrap() > 0.0);
    assert!(body["emitterCount"].as_u64().unwrap() > 0);
    let low = body["cost"]["low"].as_f64().unwrap();
    let high = body["cost"]["high"].as_f64().unwrap();
    assert!(low > 0.0 && low <= high);
}

// ---------------------------------------------------------------------------
// POST /api/companions
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_companions_flags_antagonists() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "placements": [
            { "plantId": "tomato", "bedId": "bed-1", "x": 0.0, "y": 0.0 },
            { "plantId": "fennel", "bedId": "bed-1", "x": 18.0, "y": 0.0 }
        ]
    });
    let req = test::TestRequest::post()
        .uri("/api/companions")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["compatible"], false);
    assert_eq!(body["relationships"][0]["kind"], "Antagonistic");
    assert!(body["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w.as_str().unwrap().contains("too close")));
}
