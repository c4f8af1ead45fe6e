// src/api/handlers/uuid.rs
use actix_web::{web, HttpResponse};

use crate::api::types::{UuidGenerationRequest, UuidGenerationResponse};
use crate::generators;

const MAX_QUANTITY: usize = 1000;

fn failure(message: impl Into<String>) -> UuidGenerationResponse {
    UuidGenerationResponse {
        success: false,
        uuids: None,
        error: Some(message.into()),
    }
}

/// Generate UUIDs
///
/// Returns the requested number of random version-4 UUIDs.
#[utoipa::path(
    post,
    path = "/generator/uuid",
    tag = "Uuid",
    request_body = UuidGenerationRequest,
    responses(
        (status = 200, description = "Generated UUIDs", body = UuidGenerationResponse),
        (status = 400, description = "Invalid quantity", body = UuidGenerationResponse)
    )
)]
pub async fn generate_uuids(request: web::Json<UuidGenerationRequest>) -> HttpResponse {
    if request.quantity == 0 {
        return HttpResponse::BadRequest().json(failure("Quantity must be a positive integer."));
    }

    if request.quantity > MAX_QUANTITY {
        return HttpResponse::BadRequest().json(failure(format!(
            "Quantity must be at most {}.",
            MAX_QUANTITY
        )));
    }

    HttpResponse::Ok().json(UuidGenerationResponse {
        success: true,
        uuids: Some(generators::uuid::generate_batch(request.quantity)),
        error: None,
    })
}
