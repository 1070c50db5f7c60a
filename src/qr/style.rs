//! Cosmetic QR rendering parameters

use serde::{Deserialize, Serialize};

/// Error-correction tier, low to high redundancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% recovery; payment URIs are short so this keeps symbols small
    #[default]
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl ErrorCorrection {
    /// Parse a case-insensitive tier name (`low`, `l`, `medium`, `m`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "quartile" | "q" => Some(Self::Quartile),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// Shape drawn for each dark module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleShape {
    /// Plain filled square
    Square,
    /// Square whose free-standing corners are rounded off
    #[default]
    Rounded,
    /// Disc inscribed in the module cell
    Circle,
}

impl ModuleShape {
    /// Parse a case-insensitive shape name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "square" => Some(Self::Square),
            "rounded" => Some(Self::Rounded),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }
}

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor(pub [u8; 3]);

impl RgbColor {
    /// Pehenava amber
    pub const AMBER: Self = Self([255, 193, 7]);
    /// Pehenava rose
    pub const ROSE: Self = Self([220, 38, 127]);
    /// Black
    pub const BLACK: Self = Self([0, 0, 0]);
    /// White
    pub const WHITE: Self = Self([255, 255, 255]);

    /// Linear interpolation towards `other`; `t` is clamped to `0..=1`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 3];
        for (i, channel) in out.iter_mut().enumerate() {
            let from = f64::from(self.0[i]);
            let to = f64::from(other.0[i]);
            *channel = (from + (to - from) * t).round() as u8;
        }
        Self(out)
    }
}

/// Colour fading from the image centre out to its corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Colour at the centre of the image
    pub center: RgbColor,
    /// Colour at the corners of the image
    pub edge: RgbColor,
}

impl RadialGradient {
    /// Single-colour "gradient"
    pub fn solid(color: RgbColor) -> Self {
        Self {
            center: color,
            edge: color,
        }
    }

    /// Colour for pixel `(x, y)` in a square image of side `size`.
    pub fn color_at(&self, x: u32, y: u32, size: u32) -> RgbColor {
        let half = f64::from(size) / 2.0;
        if half == 0.0 {
            return self.center;
        }
        let dx = f64::from(x) - half;
        let dy = f64::from(y) - half;
        let t = (dx * dx + dy * dy).sqrt() / (std::f64::consts::SQRT_2 * half);
        self.center.lerp(self.edge, t)
    }
}

impl Default for RadialGradient {
    fn default() -> Self {
        Self {
            center: RgbColor::AMBER,
            edge: RgbColor::ROSE,
        }
    }
}

/// Complete rendering configuration for one QR image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrStyle {
    /// Error-correction tier
    pub error_correction: ErrorCorrection,
    /// Pixel size of one module
    pub module_size: u32,
    /// Border width in modules
    pub quiet_zone: u32,
    /// Dark module shape
    pub shape: ModuleShape,
    /// Dark module colouring
    pub gradient: RadialGradient,
}

impl QrStyle {
    /// Black square modules; the highest-contrast rendering.
    pub fn plain() -> Self {
        Self {
            shape: ModuleShape::Square,
            gradient: RadialGradient::solid(RgbColor::BLACK),
            ..Self::default()
        }
    }

    /// Same style with a different module size
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = module_size;
        self
    }
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Low,
            module_size: 10,
            quiet_zone: 4,
            shape: ModuleShape::Rounded,
            gradient: RadialGradient::default(),
        }
    }
}
