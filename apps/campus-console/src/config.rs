//! # Console Configuration
//!
//! TOML-backed configuration loaded from disk. Every key is optional; a
//! missing file section falls back to the built-in defaults.
//!
//! ```toml
//! campus_name = "GLA University"
//! tick_interval_ms = 400
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [emergency_contacts.external]
//! ambulance = "108"
//! fire = "101"
//! police = "100"
//! ```
//!
//! Security settings (CORS origins, rate limit, API key) stay as environment
//! variables, see the `api` module.

use campus_core::{CampusError, DEFAULT_TICK_INTERVAL_MS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Contact groups (e.g. `external`, `campus`) mapping a service to its number.
pub type EmergencyContacts = BTreeMap<String, BTreeMap<String, String>>;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Campus shown in the hero banner.
    pub campus_name: String,
    /// Period between two pipeline ticks.
    pub tick_interval_ms: u64,
    pub server: ServerConfig,
    /// Shown next to the snapshot once an incident is reported.
    pub emergency_contacts: EmergencyContacts,
}

/// Bind address for the HTTP console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            campus_name: "GLA University".to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            server: ServerConfig::default(),
            emergency_contacts: EmergencyContacts::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, CampusError> {
        let config: ConsoleConfig =
            toml::from_str(content).map_err(|e| CampusError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CampusError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let metadata = std::fs::metadata(path).map_err(|e| {
            CampusError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(CampusError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<(), CampusError> {
        if self.tick_interval_ms == 0 {
            return Err(CampusError::ConfigError(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.campus_name.trim().is_empty() {
            return Err(CampusError::ConfigError(
                "campus_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Tick period as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// `host:port` for the HTTP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.campus_name, "GLA University");
        assert_eq!(config.tick_interval(), Duration::from_millis(400));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(ConsoleConfig::load(None), Ok(ConsoleConfig::default()));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = ConsoleConfig::from_toml("campus_name = \"North Campus\"\n").expect("parse");
        assert_eq!(config.campus_name, "North Campus");
        assert_eq!(config.tick_interval_ms, 400);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn server_section() {
        let config =
            ConsoleConfig::from_toml("[server]\nhost = \"0.0.0.0\"\nport = 9000\n").expect("parse");
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn emergency_contacts_table() {
        let config = ConsoleConfig::from_toml(
            "[emergency_contacts.external]\nambulance = \"108\"\nfire = \"101\"\n\n\
             [emergency_contacts.campus]\nsecurity_desk = \"ext. 4000\"\n",
        )
        .expect("parse");

        assert_eq!(config.emergency_contacts.len(), 2);
        assert_eq!(
            config.emergency_contacts["external"].get("ambulance").map(String::as_str),
            Some("108")
        );
        assert_eq!(
            config.emergency_contacts["campus"].get("security_desk").map(String::as_str),
            Some("ext. 4000")
        );
        assert!(ConsoleConfig::default().emergency_contacts.is_empty());
    }

    #[test]
    fn zero_tick_rejected() {
        let err = ConsoleConfig::from_toml("tick_interval_ms = 0\n").expect_err("invalid");
        assert!(matches!(err, CampusError::ConfigError(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ConsoleConfig::from_toml("risk_zones = []\n").expect_err("invalid");
        assert!(matches!(err, CampusError::ConfigError(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "campus_name = \"East Campus\"\ntick_interval_ms = 250").expect("write");

        let config = ConsoleConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.campus_name, "East Campus");
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ConsoleConfig::load(Some(&dir.path().join("absent.toml"))).expect_err("missing");
        assert!(matches!(err, CampusError::IoError(_)));
    }
}
