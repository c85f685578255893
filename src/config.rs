use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::DeviceError;

pub const ADB_ENV: &str = "REVODRAW_ADB";
pub const SERIAL_ENV: &str = "REVODRAW_SERIAL";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub device: DeviceConfig,
    pub drawing: DrawingConfig,
    pub detection: DetectionConfig,
    pub server: ServerConfig,
}

// ---------------------------------------------------------------------------
// Device
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// `adb` executable, either a bare name resolved through `PATH` or a path.
    pub adb_path: String,
    /// Target a specific device (`adb -s <serial>`).
    pub serial: Option<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            adb_path: "adb".to_string(),
            serial: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Swipe duration for image paths.
    pub stroke_duration_ms: u64,
    /// Pause after each image swipe.
    pub stroke_delay_ms: u64,
    /// Swipe duration for shapes and text.
    pub shape_stroke_ms: u64,
    /// Pause after each shape swipe.
    pub shape_delay_ms: u64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_duration_ms: 60,
            stroke_delay_ms: 15,
            shape_stroke_ms: 80,
            shape_delay_ms: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Where captured screenshots, debug overlays and previews are written.
    pub output_dir: PathBuf,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:5000".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load a [`Config`] from `path` if given, otherwise start from defaults.
/// Environment overrides are applied afterwards.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let path = path.as_ref();
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("failed to parse config file: {}", path.display()))?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(adb) = lookup(ADB_ENV).filter(|v| !v.is_empty()) {
        config.device.adb_path = adb;
    }
    if let Some(serial) = lookup(SERIAL_ENV).filter(|v| !v.is_empty()) {
        config.device.serial = Some(serial);
    }
}

/// Basic sanity checks that cannot be expressed purely with serde.
fn validate_config(config: &Config) -> Result<()> {
    anyhow::ensure!(
        !config.device.adb_path.trim().is_empty(),
        "device.adb_path must not be empty"
    );
    anyhow::ensure!(
        config.drawing.stroke_duration_ms > 0 && config.drawing.shape_stroke_ms > 0,
        "stroke durations must be positive"
    );

    // bare names are resolved through PATH when adb is spawned
    let adb = Path::new(&config.device.adb_path);
    if adb.components().count() > 1 && !is_executable::is_executable(adb) {
        return Err(DeviceError::NotExecutable(config.device.adb_path.clone()).into());
    }

    Ok(())
}
