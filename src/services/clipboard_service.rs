//! Clipboard service for QRBar.
//!
//! Wraps the system clipboard behind a capability trait so the
//! presentation layer can copy history text and QR bitmaps. The core
//! never calls this directly.

use std::borrow::Cow;

use arboard::{Clipboard, ImageData};
use image::GrayImage;

use crate::types::errors::ClipboardError;

/// Trait defining clipboard operations used by the presentation layer.
pub trait ClipboardServiceTrait {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn write_image(&mut self, image: &GrayImage) -> Result<(), ClipboardError>;
}

/// Clipboard service backed by the system clipboard.
pub struct ClipboardService {
    clipboard: Clipboard,
}

impl ClipboardService {
    /// Opens the system clipboard. Fails in headless sessions where no
    /// clipboard is available.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardServiceTrait for ClipboardService {
    /// Returns the current clipboard text.
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.clipboard
            .get_text()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    /// Replaces the clipboard contents with a QR bitmap, expanded to the
    /// RGBA layout the system clipboard expects.
    fn write_image(&mut self, image: &GrayImage) -> Result<(), ClipboardError> {
        let rgba = image::DynamicImage::ImageLuma8(image.clone()).to_rgba8();
        let (width, height) = rgba.dimensions();

        let data = ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        };

        self.clipboard
            .set_image(data)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
