//! Persisting rendered QR codes to disk

use crate::error::{Error, Result};
use crate::payment::{PaymentUri, format_amount};
use chrono::{Local, NaiveDateTime};
use image::{DynamicImage, ImageFormat};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// Default directory the storefront serves QR codes from
pub const DEFAULT_OUTPUT_DIR: &str = "public/qr_codes";
/// Default file name of the open-amount QR code
pub const DEFAULT_STATIC_FILE_NAME: &str = "pehenava_payment_qr.png";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What a generated QR code pays for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Open amount, fixed file name
    Static,
    /// Fixed amount, timestamped file name
    Amount(Decimal),
}

/// A QR image written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    /// Where the PNG was written
    pub path: PathBuf,
    /// The encoded payment URI
    pub uri: PaymentUri,
    /// Static or fixed-amount
    pub kind: ArtifactKind,
}

/// Writes PNG files into a single output directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    static_file_name: String,
}

impl OutputWriter {
    /// Writer targeting `dir`, using `static_file_name` for open-amount codes
    pub fn new(dir: impl Into<PathBuf>, static_file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            static_file_name: static_file_name.into(),
        }
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory (and parents) if missing. Existing
    /// contents are left alone.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create directory {}: {e}", self.dir.display()),
            ))
        })
    }

    /// Fixed path for the open-amount QR code
    pub fn static_path(&self) -> PathBuf {
        self.dir.join(&self.static_file_name)
    }

    /// Path for a fixed-amount QR code generated now
    pub fn amount_path(&self, amount: Decimal) -> PathBuf {
        self.dir.join(amount_file_name(amount, Local::now().naive_local()))
    }

    /// Encode `image` as PNG at `path`, replacing any existing file.
    pub fn write(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        self.ensure_dir()?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Image(format!("Failed to write {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Wrote QR image");
        Ok(())
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_STATIC_FILE_NAME)
    }
}

/// `payment_qr_<amount>_<YYYYMMDD_HHMMSS>.png`
pub fn amount_file_name(amount: Decimal, at: NaiveDateTime) -> String {
    format!(
        "payment_qr_{}_{}.png",
        format_amount(amount),
        at.format(TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use image::RgbImage;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 31)
            .unwrap()
    }

    #[test]
    fn amount_file_name_embeds_amount_and_timestamp() {
        assert_eq!(
            amount_file_name(Decimal::from(25000), at()),
            "payment_qr_25000_20240309_070531.png"
        );
    }

    #[test]
    fn static_path_is_fixed() {
        let writer = OutputWriter::new("out", DEFAULT_STATIC_FILE_NAME);
        assert_eq!(writer.static_path(), Path::new("out/pehenava_payment_qr.png"));
        assert_eq!(writer.static_path(), writer.static_path());
    }

    #[test]
    fn write_creates_nested_directory_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path().join("public/qr_codes"), "fixed.png");
        let path = writer.static_path();

        let small = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        writer.write(&small, &path).unwrap();
        let large = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        writer.write(&large, &path).unwrap();

        let reread = image::open(&path).unwrap();
        assert_eq!(reread.width(), 8);
    }

    #[test]
    fn ensure_dir_keeps_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let keep = tmp.path().join("keep.txt");
        std::fs::write(&keep, "x").unwrap();

        let writer = OutputWriter::new(tmp.path(), DEFAULT_STATIC_FILE_NAME);
        writer.ensure_dir().unwrap();
        writer.ensure_dir().unwrap();

        assert_eq!(std::fs::read_to_string(&keep).unwrap(), "x");
    }

    #[test]
    fn write_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let writer = OutputWriter::new(&blocker, DEFAULT_STATIC_FILE_NAME);
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(writer.write(&image, &writer.static_path()).is_err());
    }
}
