// QRBar services
// Services provide core functionality: QR encoding, preferences, clipboard access.

pub mod clipboard_service;
pub mod preferences;
pub mod qr_encoder;
