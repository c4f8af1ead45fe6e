// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::password::generate_passwords,
        crate::api::handlers::hash::hash_text,
        crate::api::handlers::uuid::generate_uuids,
        crate::api::handlers::qr::generate_qr,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::HashRequest,
            crate::api::types::HashResponse,
            crate::api::types::UuidGenerationRequest,
            crate::api::types::UuidGenerationResponse,
            crate::api::types::QrGenerationRequest,
            crate::api::types::QrGenerationResponse,
        )
    ),
    tags(
        (name = "Passwords", description = "Random password generation"),
        (name = "Hashing", description = "Text hashing"),
        (name = "Uuid", description = "UUID generation"),
        (name = "QrCode", description = "QR code image generation")
    ),
    info(
        title = "QuickGen API",
        version = "0.1.0",
        description = "Password, hash, UUID and QR code generation utilities"
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting QuickGen API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let bind = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
