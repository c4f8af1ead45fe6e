// src/generators/qr.rs
use base64::Engine;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Pixels per QR module in the rendered image.
const MODULE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to build QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `data` as a QR symbol at error-correction level Low and return the
/// grayscale PNG as a base64 data URI.
pub fn generate_data_uri(data: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .build();

    let mut png_bytes: Vec<u8> = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    image::ImageEncoder::write_image(
        encoder,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::L8,
    )?;

    let payload = base64::engine::general_purpose::STANDARD.encode(&png_bytes);
    Ok(format!("data:image/png;base64,{payload}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_URI_PREFIX: &str = "data:image/png;base64,";

    #[test]
    fn produces_a_png_data_uri() {
        let uri = generate_data_uri("https://example.com").unwrap();
        assert!(uri.starts_with(DATA_URI_PREFIX));

        let png = base64::engine::general_purpose::STANDARD
            .decode(&uri[DATA_URI_PREFIX.len()..])
            .unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn encodes_short_data() {
        let uri = generate_data_uri("hello").unwrap();
        assert!(uri.len() > DATA_URI_PREFIX.len());
    }

    #[test]
    fn encodes_non_ascii_data() {
        assert!(generate_data_uri("héllo wörld").is_ok());
    }
}
