//! QR code decoder using rqrr

use crate::error::{Error, Result};
use crate::qr::QrPayload;
use image::{DynamicImage, GrayImage};

/// Reads QR codes back out of rendered images
#[derive(Debug, Default, Clone, Copy)]
pub struct QrDecoder;

impl QrDecoder {
    /// Create a new QR decoder with default settings
    pub fn new() -> Self {
        Self
    }

    /// Decode the first QR code found in an image
    pub fn decode(&self, img: &DynamicImage) -> Result<QrPayload> {
        self.decode_gray(img.to_luma8())
    }

    /// Decode the first QR code found in a grayscale image
    pub fn decode_gray(&self, img: GrayImage) -> Result<QrPayload> {
        let mut prepared = rqrr::PreparedImage::prepare(img);
        let grids = prepared.detect_grids();

        let grid = grids.first().ok_or(Error::NoQrCodeFound)?;

        match grid.decode() {
            Ok((meta, content)) => {
                tracing::debug!(
                    "Decoded QR: version={:?}, ecc_level={:?}, length={}",
                    meta.version,
                    meta.ecc_level,
                    content.len()
                );

                Ok(QrPayload::from_bytes(content.into_bytes()))
            }
            Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
        }
    }

    /// Check that `img` decodes to exactly `expected`.
    pub fn verify(&self, img: &DynamicImage, expected: &QrPayload) -> Result<()> {
        let decoded = self
            .decode(img)
            .map_err(|e| Error::Verification(e.to_string()))?;

        if decoded.as_bytes() != expected.as_bytes() {
            return Err(Error::Verification(format!(
                "decoded {:?}, expected {:?}",
                decoded.as_str().unwrap_or("<binary>"),
                expected.as_str().unwrap_or("<binary>")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_has_no_code() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, image::Luma([255])));
        assert!(matches!(
            QrDecoder::new().decode(&blank),
            Err(Error::NoQrCodeFound)
        ));
    }

    #[test]
    fn verify_reports_missing_code() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, image::Luma([255])));
        let expected = QrPayload::from_string("upi://pay".to_string());
        assert!(matches!(
            QrDecoder::new().verify(&blank, &expected),
            Err(Error::Verification(_))
        ));
    }
}
