//! QR code rendering

use super::{ModuleShape, QrPayload, QrStyle, RgbColor};
use crate::error::{Error, Result};
use image::{DynamicImage, Rgb, RgbImage};
use qrcode::{Color, QrCode};

/// Turns a payload into a raster image.
pub trait QrRenderer {
    /// Render `payload` using `style`.
    fn render(&self, payload: &QrPayload, style: &QrStyle) -> Result<DynamicImage>;
}

/// Paints the `qrcode` module matrix with a module shape and radial gradient
/// on a white background.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledRenderer;

impl StyledRenderer {
    /// Largest image side, in pixels, the renderer will allocate
    pub const MAX_IMAGE_SIDE: u32 = 16_384;

    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }
}

/// Pixel side of the square image for a `modules`-wide symbol.
fn image_side(modules: u32, style: &QrStyle) -> Result<u32> {
    style
        .quiet_zone
        .checked_mul(2)
        .and_then(|border| border.checked_add(modules))
        .and_then(|span| span.checked_mul(style.module_size))
        .filter(|side| *side <= StyledRenderer::MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            Error::QrEncode(format!(
                "{modules} modules with a {}-module quiet zone at {} px per module exceeds {} px",
                style.quiet_zone,
                style.module_size,
                StyledRenderer::MAX_IMAGE_SIDE
            ))
        })
}

impl QrRenderer for StyledRenderer {
    fn render(&self, payload: &QrPayload, style: &QrStyle) -> Result<DynamicImage> {
        if style.module_size == 0 {
            return Err(Error::QrEncode("module size must be at least 1 pixel".to_string()));
        }

        let code = QrCode::with_error_correction_level(payload.as_bytes(), style.error_correction.into())
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let matrix = ModuleMatrix::new(&code);
        let cell = style.module_size;
        let side = image_side(matrix.width, style)?;
        let mut image = RgbImage::from_pixel(side, side, Rgb(RgbColor::WHITE.0));

        tracing::debug!(
            version = ?code.version(),
            modules = matrix.width,
            side,
            "Rendering QR code"
        );

        for my in 0..matrix.width {
            for mx in 0..matrix.width {
                if !matrix.is_dark(mx as i64, my as i64) {
                    continue;
                }

                let neighbours = matrix.neighbours(mx, my);
                let origin_x = (mx + style.quiet_zone) * cell;
                let origin_y = (my + style.quiet_zone) * cell;

                for dy in 0..cell {
                    for dx in 0..cell {
                        if !covers(style.shape, dx, dy, cell, neighbours) {
                            continue;
                        }
                        let (px, py) = (origin_x + dx, origin_y + dy);
                        let color = style.gradient.color_at(px, py, side);
                        image.put_pixel(px, py, Rgb(color.0));
                    }
                }
            }
        }

        Ok(DynamicImage::ImageRgb8(image))
    }
}

struct ModuleMatrix {
    width: u32,
    colors: Vec<Color>,
}

impl ModuleMatrix {
    fn new(code: &QrCode) -> Self {
        Self {
            width: code.width() as u32,
            colors: code.to_colors(),
        }
    }

    /// Out-of-range coordinates count as light.
    fn is_dark(&self, x: i64, y: i64) -> bool {
        let w = i64::from(self.width);
        if x < 0 || y < 0 || x >= w || y >= w {
            return false;
        }
        self.colors[(y * w + x) as usize] == Color::Dark
    }

    fn neighbours(&self, x: u32, y: u32) -> Neighbours {
        let (x, y) = (i64::from(x), i64::from(y));
        Neighbours {
            north: self.is_dark(x, y - 1),
            south: self.is_dark(x, y + 1),
            east: self.is_dark(x + 1, y),
            west: self.is_dark(x - 1, y),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Neighbours {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

/// Whether pixel `(dx, dy)` inside a module cell is painted.
fn covers(shape: ModuleShape, dx: u32, dy: u32, cell: u32, n: Neighbours) -> bool {
    let radius = f64::from(cell) / 2.0;
    let fx = f64::from(dx) + 0.5 - radius;
    let fy = f64::from(dy) + 0.5 - radius;
    let in_disc = fx * fx + fy * fy <= radius * radius;

    match shape {
        ModuleShape::Square => true,
        ModuleShape::Circle => in_disc,
        ModuleShape::Rounded => {
            let vertical_joined = if fy < 0.0 { n.north } else { n.south };
            let horizontal_joined = if fx < 0.0 { n.west } else { n.east };
            vertical_joined || horizontal_joined || in_disc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{QrDecoder, RadialGradient};

    fn payload() -> QrPayload {
        QrPayload::from_string(
            "upi://pay?pa=pehenava@paytm&pn=Pehenava&am=1000&cu=INR&tn=Pehenava%20Purchase"
                .to_string(),
        )
    }

    #[test]
    fn image_side_includes_quiet_zone() {
        let style = QrStyle::plain().with_module_size(4);
        let image = StyledRenderer::new().render(&payload(), &style).unwrap();
        let modules = QrCode::with_error_correction_level(payload().as_bytes(), qrcode::EcLevel::L)
            .unwrap()
            .width() as u32;

        assert_eq!(image.width(), (modules + 8) * 4);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn quiet_zone_stays_white() {
        let image = StyledRenderer::new()
            .render(&payload(), &QrStyle::default())
            .unwrap()
            .to_rgb8();
        let border = 4 * 10;
        for i in 0..image.width() {
            assert_eq!(image.get_pixel(i, border - 1).0, RgbColor::WHITE.0);
            assert_eq!(image.get_pixel(border - 1, i).0, RgbColor::WHITE.0);
        }
    }

    #[test]
    fn rounded_finder_corner_is_cut() {
        let style = QrStyle {
            gradient: RadialGradient::solid(RgbColor::BLACK),
            ..QrStyle::default()
        };
        let image = StyledRenderer::new().render(&payload(), &style).unwrap().to_rgb8();

        // Top-left module of the top-left finder pattern has no north/west neighbour.
        let origin = 4 * 10;
        assert_eq!(image.get_pixel(origin, origin).0, RgbColor::WHITE.0);
        assert_eq!(image.get_pixel(origin + 5, origin + 5).0, RgbColor::BLACK.0);
        // Its south-east corner joins the rest of the ring.
        assert_eq!(image.get_pixel(origin + 9, origin + 9).0, RgbColor::BLACK.0);
    }

    #[test]
    fn plain_render_decodes_to_payload() {
        let image = StyledRenderer::new()
            .render(&payload(), &QrStyle::plain())
            .unwrap();
        let decoded = QrDecoder::new().decode(&image).unwrap();
        assert_eq!(decoded.as_str(), payload().as_str());
    }

    #[test]
    fn oversized_payload_fails() {
        let huge = QrPayload::from_bytes(vec![b'x'; 8000]);
        let err = StyledRenderer::new()
            .render(&huge, &QrStyle::default())
            .unwrap_err();
        assert!(matches!(err, Error::QrEncode(_)));
    }

    #[test]
    fn default_styles_decode_to_payload() {
        let decoder = QrDecoder::new();
        for module_size in [10, 15] {
            let style = QrStyle::default().with_module_size(module_size);
            assert_eq!(style.shape, ModuleShape::Rounded);
            assert_eq!(style.gradient, RadialGradient::default());

            let image = StyledRenderer::new().render(&payload(), &style).unwrap();
            decoder.verify(&image, &payload()).unwrap();
        }
    }

    #[test]
    fn oversized_geometry_fails_without_panicking() {
        let renderer = StyledRenderer::new();
        let huge_border = QrStyle {
            quiet_zone: u32::MAX / 2 + 1,
            ..QrStyle::plain()
        };
        let huge_modules = QrStyle::plain().with_module_size(u32::MAX);
        let too_wide = QrStyle::plain().with_module_size(1_000);

        for style in [huge_border, huge_modules, too_wide] {
            let err = renderer.render(&payload(), &style).unwrap_err();
            assert!(matches!(err, Error::QrEncode(_)), "{err}");
        }
    }

    #[test]
    fn zero_module_size_is_rejected() {
        let style = QrStyle::plain().with_module_size(0);
        assert!(StyledRenderer::new().render(&payload(), &style).is_err());
    }
}
