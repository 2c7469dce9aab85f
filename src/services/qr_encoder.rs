//! QR encoder adapter for QRBar.
//!
//! Stateless conversion of text into a QR bitmap. The bit matrix comes
//! from the `qrcode` crate at its default error-correction level; each
//! module is rendered as a fixed-size block of pixels with no
//! interpolation, so module edges stay crisp at any zoom.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::QrCode;

use crate::types::errors::EncodeError;

/// Default pixels per QR module in rendered output.
pub const MODULE_SCALE: u32 = 10;

/// Trait defining the QR encoding capability.
pub trait QrEncoderTrait {
    fn encode(&self, text: &str) -> Result<GrayImage, EncodeError>;
    fn encode_png(&self, text: &str) -> Result<Vec<u8>, EncodeError>;
}

/// QR encoder with a configurable module scale factor.
pub struct QrEncoder {
    scale: u32,
}

impl QrEncoder {
    /// Creates an encoder rendering at the default 10x module scale.
    pub fn new() -> Self {
        Self {
            scale: MODULE_SCALE,
        }
    }

    /// Creates an encoder rendering each module as a `scale`-pixel square.
    /// A scale of zero is clamped to one so output is never empty.
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// Returns the configured pixels-per-module scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn map_qr_error(err: QrError, input_len: usize) -> EncodeError {
        match err {
            QrError::DataTooLong => EncodeError::DataTooLong(format!(
                "{} bytes exceed QR capacity at the default error-correction level",
                input_len
            )),
            other => EncodeError::EncodingFailed(other.to_string()),
        }
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrEncoderTrait for QrEncoder {
    /// Encodes `text` into a grayscale QR bitmap.
    ///
    /// The output is square with side length `matrix_width * scale`: the
    /// quiet zone is omitted so the bitmap is an exact integer upscale of
    /// the bit matrix. Callers must not pass empty content; they treat a
    /// returned error as "no image available" and skip rendering.
    fn encode(&self, text: &str) -> Result<GrayImage, EncodeError> {
        let code =
            QrCode::new(text.as_bytes()).map_err(|e| Self::map_qr_error(e, text.len()))?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(self.scale, self.scale)
            .build();

        Ok(image)
    }

    /// Encodes `text` into PNG bytes of the same bitmap, for file export
    /// and clipboard image payloads.
    fn encode_png(&self, text: &str) -> Result<Vec<u8>, EncodeError> {
        let image = self.encode(text)?;

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| EncodeError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

        Ok(bytes)
    }
}
