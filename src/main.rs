use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use potager::api::openapi::ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let bind_addr = "0.0.0.0:8080";
    println!("🌱 Potager planning engine started at http://{bind_addr}");
    println!("   GET  /api/plants");
    println!("   GET  /api/plants/{{id}}/companions");
    println!("   POST /api/layout");
    println!("   POST /api/rotation");
    println!("   POST /api/materials");
    println!("   POST /api/companions");
    println!("   ");
    println!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    println!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(potager::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
