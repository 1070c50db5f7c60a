//! Runtime configuration handling

use crate::error::{Error, Result};
use crate::output::{DEFAULT_OUTPUT_DIR, DEFAULT_STATIC_FILE_NAME, OutputWriter};
use crate::payment::{Payee, UpiUriBuilder};
use crate::qr::{ErrorCorrection, ModuleShape, QrStyle, RadialGradient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PehenavaConfig {
    /// Who receives payments
    pub payee: PayeeOptions,
    /// How QR codes look
    pub render: RenderOptions,
    /// Where QR codes go
    pub output: OutputOptions,
    /// What the direct-run batch generates
    pub batch: BatchOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl PehenavaConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let source = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover_file()?,
        };

        let mut config = match source.as_deref() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.source = source;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["pehenava.toml", "pehenava.yaml", "pehenava.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("pehenava");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.payee.apply_env_overrides();
        self.render.apply_env_overrides();
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// Payee and URI constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PayeeOptions {
    /// UPI virtual payment address
    pub id: String,
    /// Display name
    pub name: String,
    /// Transaction note attached to every URI
    pub note: String,
    /// ISO 4217 currency code
    pub currency: String,
}

impl Default for PayeeOptions {
    fn default() -> Self {
        let payee = Payee::default();
        Self {
            id: payee.id,
            name: payee.name,
            note: UpiUriBuilder::NOTE.to_string(),
            currency: UpiUriBuilder::CURRENCY.to_string(),
        }
    }
}

impl PayeeOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(id) = env::var("PEHENAVA_PAYEE_ID") {
            self.id = id;
        }
        if let Ok(name) = env::var("PEHENAVA_PAYEE_NAME") {
            self.name = name;
        }
        if let Ok(note) = env::var("PEHENAVA_NOTE") {
            self.note = note;
        }
    }

    /// Validated payee
    pub fn payee(&self) -> Result<Payee> {
        Payee::new(self.id.clone(), self.name.clone())
    }

    /// URI builder carrying the configured note and currency
    pub fn uri_builder(&self) -> UpiUriBuilder {
        UpiUriBuilder::new()
            .note(self.note.clone())
            .currency(self.currency.clone())
    }
}

/// QR styling shared by static and amount codes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Error-correction tier
    pub error_correction: ErrorCorrection,
    /// Pixel size of one module for fixed-amount codes
    pub module_size: u32,
    /// Pixel size of one module for the static code
    pub static_module_size: u32,
    /// Border width in modules
    pub quiet_zone: u32,
    /// Dark module shape
    pub shape: ModuleShape,
    /// Dark module colouring
    pub gradient: RadialGradient,
    /// Decode every image after rendering and fail on mismatch
    pub verify: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Low,
            module_size: 10,
            static_module_size: 15,
            quiet_zone: 4,
            shape: ModuleShape::Rounded,
            gradient: RadialGradient::default(),
            verify: false,
        }
    }
}

impl RenderOptions {
    /// Largest accepted module size in pixels
    pub const MAX_MODULE_SIZE: u32 = 100;
    /// Widest accepted quiet zone in modules
    pub const MAX_QUIET_ZONE: u32 = 40;

    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("PEHENAVA_QR_ECC") {
            if let Some(parsed) = ErrorCorrection::parse(&level) {
                self.error_correction = parsed;
            }
        }
        if let Ok(shape) = env::var("PEHENAVA_QR_SHAPE") {
            if let Some(parsed) = ModuleShape::parse(&shape) {
                self.shape = parsed;
            }
        }
        if let Ok(verify) = env::var("PEHENAVA_QR_VERIFY") {
            match verify.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => self.verify = true,
                "0" | "false" | "off" => self.verify = false,
                _ => {}
            }
        }
    }

    fn style(&self, key: &str, module_size: u32) -> Result<QrStyle> {
        if !(1..=Self::MAX_MODULE_SIZE).contains(&module_size) {
            return Err(Error::Config(format!(
                "render.{key} must be between 1 and {}, got {module_size}",
                Self::MAX_MODULE_SIZE
            )));
        }
        if self.quiet_zone > Self::MAX_QUIET_ZONE {
            return Err(Error::Config(format!(
                "render.quiet_zone must be at most {}, got {}",
                Self::MAX_QUIET_ZONE,
                self.quiet_zone
            )));
        }

        Ok(QrStyle {
            error_correction: self.error_correction,
            module_size,
            quiet_zone: self.quiet_zone,
            shape: self.shape,
            gradient: self.gradient,
        })
    }

    /// Style for fixed-amount codes
    pub fn amount_style(&self) -> Result<QrStyle> {
        self.style("module_size", self.module_size)
    }

    /// Style for the static code
    pub fn static_style(&self) -> Result<QrStyle> {
        self.style("static_module_size", self.static_module_size)
    }
}

/// Output location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory QR images are written to
    pub dir: PathBuf,
    /// File name of the static QR image
    pub static_file_name: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            static_file_name: DEFAULT_STATIC_FILE_NAME.to_string(),
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("PEHENAVA_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.dir = PathBuf::from(dir);
            }
        }
    }

    /// Writer for the configured location
    pub fn writer(&self) -> Result<OutputWriter> {
        let name = Path::new(&self.static_file_name);
        if self.static_file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(Error::Config(format!(
                "static_file_name '{}' must be a bare file name",
                self.static_file_name
            )));
        }
        Ok(OutputWriter::new(&self.dir, &self.static_file_name))
    }
}

/// Direct-run batch contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Generate the static QR first
    pub include_static: bool,
    /// Fixed amounts to generate, in order
    pub amounts: Vec<Decimal>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            include_static: true,
            amounts: crate::batch::demo_amounts(),
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `PEHENAVA_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    /// Defaults with `PEHENAVA_LOG_*` overrides applied, for tools without a config file
    pub fn from_env() -> Self {
        let mut options = Self::default();
        options.apply_env_overrides();
        options
    }

    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("PEHENAVA_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("PEHENAVA_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("PEHENAVA_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("PEHENAVA_LOG_ROTATION") {
            if let Ok(parsed) = rotation.parse::<LogRotation>() {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            _ => Err(format!(
                "Unsupported log rotation '{value}', expected 'hourly' or 'daily'"
            )),
        }
    }
}
