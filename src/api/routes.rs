use actix_web::web;

use crate::api::handlers::{
    get_companions, list_plants, post_companions, post_layout, post_materials, post_rotation,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_plants)
            .service(get_companions)
            .service(post_layout)
            .service(post_rotation)
            .service(post_materials)
            .service(post_companions),
    );
}
