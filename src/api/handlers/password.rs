// src/api/handlers/password.rs
use actix_web::{web, HttpResponse};
use rand::thread_rng;

use crate::api::types::{PasswordGenerationRequest, PasswordGenerationResponse};
use crate::core::config::Config;
use crate::generators::password::{self, GeneratorError};
use crate::models::GenerationOptions;

const MAX_LENGTH: usize = 256;
const MAX_QUANTITY: usize = 100;

fn failure(message: impl Into<String>) -> PasswordGenerationResponse {
    PasswordGenerationResponse {
        success: false,
        passwords: None,
        error: Some(message.into()),
    }
}

/// Generate passwords
///
/// Generates one or more random passwords from the selected character
/// classes.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Passwords",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request", body = PasswordGenerationResponse),
        (status = 422, description = "Constraints cannot be satisfied", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_passwords(
    config: web::Data<Config>,
    request: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let options = GenerationOptions {
        length: request.length.unwrap_or(config.default_password_length),
        quantity: request.quantity.unwrap_or(config.default_password_quantity),
        include_numbers: request.include_numbers.unwrap_or(false),
        include_lowercase: request.include_lowercase.unwrap_or(false),
        include_uppercase: request.include_uppercase.unwrap_or(false),
        include_symbols: request.include_symbols.unwrap_or(false),
        begin_with_letter: request.begin_with_letter.unwrap_or(false),
        no_similar_characters: request.no_similar_characters.unwrap_or(false),
        no_duplicate_characters: request.no_duplicate_characters.unwrap_or(false),
        no_sequential_characters: request.no_sequential_characters.unwrap_or(false),
        custom_symbols: request.custom_symbols.clone().unwrap_or_default(),
    };

    if options.length == 0 || options.length > MAX_LENGTH {
        return HttpResponse::BadRequest().json(failure(format!(
            "Length must be between 1 and {}.",
            MAX_LENGTH
        )));
    }

    if options.quantity == 0 || options.quantity > MAX_QUANTITY {
        return HttpResponse::BadRequest().json(failure(format!(
            "Quantity must be between 1 and {}.",
            MAX_QUANTITY
        )));
    }

    if options.include_symbols && options.custom_symbols.is_empty() {
        return HttpResponse::BadRequest().json(failure("Custom symbols cannot be empty."));
    }

    // Symbols alone do not satisfy the character-set requirement.
    if !(options.include_numbers || options.include_lowercase || options.include_uppercase) {
        return HttpResponse::BadRequest()
            .json(failure("You must select at least one character set."));
    }

    match password::generate_batch(&mut thread_rng(), &options) {
        Ok(passwords) => HttpResponse::Ok().json(PasswordGenerationResponse {
            success: true,
            passwords: Some(passwords),
            error: None,
        }),
        Err(e @ GeneratorError::ConstraintUnsatisfiable) => {
            log::warn!("password generation gave up: {}", e);
            HttpResponse::UnprocessableEntity().json(failure(e.to_string()))
        }
        Err(e) => HttpResponse::BadRequest().json(failure(e.to_string())),
    }
}
