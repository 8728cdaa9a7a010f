use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{Coordinates, source::SourceId};

pub const DEFAULT_FALLBACK_LOCATION: &str = "New York, NY";
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// fallback_location = "Boston, MA"
/// latency_ms = 250
///
/// [location]
/// lat = 42.36
/// lng = -71.06
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Location shown when no position is available.
    pub fallback_location: Option<String>,

    /// Snapshot source id, e.g. "mock".
    pub source: Option<String>,

    /// Simulated fetch delay in milliseconds.
    pub latency_ms: Option<u64>,

    /// Position reported to the dashboard as the device location.
    pub location: Option<Coordinates>,
}

impl Config {
    /// Return the configured source as a strongly-typed SourceId, defaulting to the mock source.
    pub fn source_id(&self) -> Result<SourceId> {
        match self.source.as_deref() {
            Some(s) => SourceId::try_from(s),
            None => Ok(SourceId::Mock),
        }
    }

    pub fn fallback_location(&self) -> &str {
        self.fallback_location
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_FALLBACK_LOCATION)
    }

    pub fn set_fallback_location(&mut self, location: &str) {
        let trimmed = location.trim();
        self.fallback_location = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.source_id()?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let cfg = Config::default();
        assert_eq!(cfg.fallback_location(), "New York, NY");
        assert_eq!(cfg.source_id().unwrap(), SourceId::Mock);
        assert!(cfg.location.is_none());
    }

    #[test]
    fn blank_fallback_location_uses_default() {
        let mut cfg = Config::default();
        cfg.set_fallback_location("   ");
        assert!(cfg.fallback_location.is_none());
        assert_eq!(cfg.fallback_location(), DEFAULT_FALLBACK_LOCATION);

        cfg.set_fallback_location("  Denver, CO ");
        assert_eq!(cfg.fallback_location(), "Denver, CO");
    }

    #[test]
    fn parses_full_toml() {
        let cfg = Config::from_toml(
            r#"
fallback_location = "Boston, MA"
source = "mock"
latency_ms = 250

[location]
lat = 42.36
lng = -71.06
"#,
        )
        .expect("valid config");

        assert_eq!(cfg.fallback_location(), "Boston, MA");
        assert_eq!(cfg.latency_ms, Some(250));
        assert_eq!(cfg.location, Some(Coordinates { lat: 42.36, lng: -71.06 }));
    }

    #[test]
    fn rejects_unknown_source() {
        let err = Config::from_toml("source = \"radar\"").unwrap_err();
        assert!(err.to_string().contains("Unknown weather source"));
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut cfg = Config {
            latency_ms: Some(10),
            location: Some(Coordinates { lat: 1.5, lng: 2.5 }),
            ..Config::default()
        };
        cfg.set_fallback_location("Austin, TX");

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }
}
