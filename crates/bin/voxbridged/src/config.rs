//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `voxbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashMap;

use serde::Deserialize;

use voxbridge_adapter_virtual::VirtualEntityConfig;
use voxbridge_app::smart_home::{EntityOverrides, SmartHomeConfig};
use voxbridge_domain::entity::EntityId;
use voxbridge_domain::filter::{ExposurePolicy, FilterConfig};
use voxbridge_domain::temperature::TemperatureUnit;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Smart-home bridge settings.
    pub smart_home: SmartHomeSection,
    /// Entities seeding the virtual hub; empty means the demo set.
    pub entities: Vec<VirtualEntityConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// `[smart_home]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SmartHomeSection {
    /// Mount the directive route at all.
    pub enabled: bool,
    /// Unit the hub reports temperatures in.
    pub temperature_unit: TemperatureUnit,
    /// Which entities are exposed.
    pub filter: FilterConfig,
    /// Per-entity overrides keyed by entity id.
    pub entity_config: HashMap<String, EntityOverrides>,
}

impl Config {
    /// Load configuration from `voxbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("voxbridge.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
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

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VOXBRIDGE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("VOXBRIDGE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("VOXBRIDGE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("VOXBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let filter = &self.smart_home.filter;
        let configured_ids = self
            .smart_home
            .entity_config
            .keys()
            .chain(&filter.include_entities)
            .chain(&filter.exclude_entities);
        for entity_id in configured_ids {
            if entity_id.parse::<EntityId>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "{entity_id:?} is not a valid entity id"
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SmartHomeSection {
    /// Build the dispatcher configuration.
    #[must_use]
    pub fn to_smart_home_config(&self) -> SmartHomeConfig {
        SmartHomeConfig {
            policy: ExposurePolicy::new(&self.filter),
            entity_config: self.entity_config.clone(),
            temperature_unit: self.temperature_unit,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "voxbridged=info,voxbridge=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SmartHomeSection {
    fn default() -> Self {
        Self {
            enabled: true,
            temperature_unit: TemperatureUnit::default(),
            filter: FilterConfig::default(),
            entity_config: HashMap::new(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
