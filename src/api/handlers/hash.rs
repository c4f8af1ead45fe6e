// src/api/handlers/hash.rs
use actix_web::{web, HttpResponse};

use crate::api::types::{HashRequest, HashResponse};
use crate::generators::hash::{self, HashAlgorithm};

/// Hash text
///
/// Returns the hex digest of the UTF-8 encoded text under the selected
/// algorithm.
#[utoipa::path(
    post,
    path = "/generator/hash",
    tag = "Hashing",
    request_body = HashRequest,
    responses(
        (status = 200, description = "Hex digest of the text", body = HashResponse),
        (status = 400, description = "Unsupported algorithm", body = HashResponse)
    )
)]
pub async fn hash_text(request: web::Json<HashRequest>) -> HttpResponse {
    let algorithm = match request.algorithm.parse::<HashAlgorithm>() {
        Ok(algorithm) => algorithm,
        Err(e) => {
            return HttpResponse::BadRequest().json(HashResponse {
                success: false,
                digest: None,
                algorithm: None,
                error: Some(e.to_string()),
            });
        }
    };

    let digest = hash::hex_digest(algorithm, &request.text);
    log::debug!("hashed {} bytes with {}", request.text.len(), algorithm);

    HttpResponse::Ok().json(HashResponse {
        success: true,
        digest: Some(digest),
        algorithm: Some(algorithm.to_string()),
        error: None,
    })
}
