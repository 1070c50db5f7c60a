//! QR code rendering and decoding
//!
//! Rendering sits behind the [`QrRenderer`] trait so the payment and output
//! code never depend on a particular drawing backend. [`StyledRenderer`] is
//! the default backend; [`QrDecoder`] reads images back for verification.

mod decoder;
mod renderer;
mod style;

pub use decoder::QrDecoder;
pub use renderer::{QrRenderer, StyledRenderer};
pub use style::{ErrorCorrection, ModuleShape, QrStyle, RadialGradient, RgbColor};

use crate::payment::PaymentUri;
use serde::{Deserialize, Serialize};

/// Data carried by a QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    /// The raw encoded data
    pub data: Vec<u8>,
    /// String representation if valid UTF-8
    pub text: Option<String>,
}

impl QrPayload {
    /// Create a payload from raw bytes
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let text = String::from_utf8(data.clone()).ok();
        Self { data, text }
    }

    /// Create a payload from a string
    pub fn from_string(s: String) -> Self {
        Self {
            data: s.as_bytes().to_vec(),
            text: Some(s),
        }
    }

    /// Get the payload as a string, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<&PaymentUri> for QrPayload {
    fn from(uri: &PaymentUri) -> Self {
        Self::from_string(uri.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_from_string_keeps_text() {
        let payload = QrPayload::from_string("upi://pay?pa=a@b".to_string());
        assert_eq!(payload.as_str(), Some("upi://pay?pa=a@b"));
        assert_eq!(payload.as_bytes(), b"upi://pay?pa=a@b");
    }

    #[test]
    fn payload_from_invalid_utf8_has_no_text() {
        let payload = QrPayload::from_bytes(vec![0xFF, 0xFE]);
        assert!(payload.as_str().is_none());
        assert_eq!(payload.as_bytes(), &[0xFF, 0xFE]);
    }
}
