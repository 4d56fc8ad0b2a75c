//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory, or at the path given
//! by `SMARTHOME_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use serde::Deserialize;
use smarthome_domain::device::DeviceKind;
use smarthome_domain::error::SmartHomeError;

const DEFAULT_PATH: &str = "smarthome.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Devices present when the program starts.
    pub home: HomeConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Initial contents of the home.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Devices to register at startup, in id order.
    pub devices: Vec<SeedDevice>,
    /// Subscribe every seeded light to every seeded thermostat.
    pub link_lights_to_thermostats: bool,
}

/// One device registered at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDevice {
    /// Device type tag (`light`, `thermostat`, `door`).
    pub kind: String,
    /// Initial temperature; only used by thermostats.
    #[serde(default)]
    pub temperature: i32,
}

impl SeedDevice {
    fn new(kind: &str, temperature: i32) -> Self {
        Self {
            kind: kind.to_string(),
            temperature,
        }
    }
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// seed device names an unknown kind.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHOME_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for seed in &self.home.devices {
            seed.kind.parse::<DeviceKind>()?;
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,smarthome=info".to_string(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            devices: vec![
                SeedDevice::new("light", 0),
                SeedDevice::new("thermostat", 70),
                SeedDevice::new("door", 0),
            ],
            link_lights_to_thermostats: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A seed device is not a known kind.
    #[error("invalid seed device")]
    Device(#[from] SmartHomeError),
}
