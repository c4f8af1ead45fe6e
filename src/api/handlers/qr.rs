// src/api/handlers/qr.rs
use actix_web::{web, HttpResponse};

use crate::api::types::{QrGenerationRequest, QrGenerationResponse};
use crate::generators::qr;

fn failure(message: impl Into<String>) -> QrGenerationResponse {
    QrGenerationResponse {
        success: false,
        image: None,
        error: Some(message.into()),
    }
}

/// Generate a QR code
///
/// Encodes the submitted text as a QR symbol and returns the PNG image as a
/// base64 data URI.
#[utoipa::path(
    post,
    path = "/generator/qr",
    tag = "QrCode",
    request_body = QrGenerationRequest,
    responses(
        (status = 200, description = "QR code image", body = QrGenerationResponse),
        (status = 400, description = "Empty input", body = QrGenerationResponse),
        (status = 500, description = "Encoding failure", body = QrGenerationResponse)
    )
)]
pub async fn generate_qr(request: web::Json<QrGenerationRequest>) -> HttpResponse {
    if request.data.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(failure("Please enter some text to generate the QR code."));
    }

    match qr::generate_data_uri(&request.data) {
        Ok(image) => {
            log::debug!("generated QR code for {} bytes of input", request.data.len());
            HttpResponse::Ok().json(QrGenerationResponse {
                success: true,
                image: Some(image),
                error: None,
            })
        }
        Err(e) => {
            log::error!("QR generation failed: {}", e);
            HttpResponse::InternalServerError()
                .json(failure("An error occurred while generating the QR code."))
        }
    }
}
