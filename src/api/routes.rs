// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::password::generate_passwords))
            .route("/hash", web::post().to(handlers::hash::hash_text))
            .route("/uuid", web::post().to(handlers::uuid::generate_uuids))
            .route("/qr", web::post().to(handlers::qr::generate_qr)),
    );
}
