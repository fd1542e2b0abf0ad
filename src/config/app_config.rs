//! Explorer Configuration - backend endpoint and map/production tuning as TOML values
//!
//! Every value the original frontend hardcoded is a field here. Each struct
//! implements `Default` with values matching those constants, ensuring
//! zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an explorer deployment.
///
/// Load with `ExplorerConfig::load()` which searches:
/// 1. `$TR_EXPLORER_CONFIG` env var
/// 2. `./explorer.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Backend REST endpoint
    #[serde(default)]
    pub backend: BackendConfig,

    /// Map view tuning
    #[serde(default)]
    pub map: MapConfig,

    /// Production fetch tuning
    #[serde(default)]
    pub production: ProductionConfig,
}

impl ExplorerConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TR_EXPLORER_CONFIG` environment variable
    /// 2. `./explorer.toml` in the current working directory
    /// 3. Built-in defaults (original hardcoded values)
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("TR_EXPLORER_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), backend = %config.backend.base_url, "Loaded explorer config from TR_EXPLORER_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from TR_EXPLORER_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "TR_EXPLORER_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./explorer.toml
        let local = PathBuf::from("explorer.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(backend = %config.backend.base_url, "Loaded explorer config from ./explorer.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./explorer.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No explorer.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok(config)
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Backend REST endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the well-data service (no trailing slash required)
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "defaults::timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            timeout_secs: defaults::timeout_secs(),
        }
    }
}

/// Map view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial well-search radius around the selected TR, miles
    #[serde(default = "defaults::radius_miles")]
    pub default_radius_miles: f64,

    /// Camera transition duration, milliseconds
    #[serde(default = "defaults::fly_duration_ms")]
    pub fly_duration_ms: u64,

    /// Initial lateral-length slider lower bound, feet
    #[serde(default)]
    pub min_lateral_ft: f64,

    /// Initial lateral-length slider upper bound, feet
    #[serde(default = "defaults::max_lateral_ft")]
    pub max_lateral_ft: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_radius_miles: defaults::radius_miles(),
            fly_duration_ms: defaults::fly_duration_ms(),
            min_lateral_ft: 0.0,
            max_lateral_ft: defaults::max_lateral_ft(),
        }
    }
}

/// Production fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionConfig {
    /// Quiet period before an aggregate-production fetch fires, milliseconds.
    /// Coalesces bursts of filter changes into one request.
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,

    /// Months of normalized production the backend returns per well
    #[serde(default = "defaults::months_window")]
    pub months_window: u32,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::debounce_ms(),
            months_window: defaults::months_window(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "http://localhost:5000".to_string()
    }
    pub const fn timeout_secs() -> u64 {
        30
    }
    pub const fn radius_miles() -> f64 {
        10.0
    }
    pub const fn fly_duration_ms() -> u64 {
        2000
    }
    pub const fn max_lateral_ft() -> f64 {
        20_000.0
    }
    pub const fn debounce_ms() -> u64 {
        300
    }
    pub const fn months_window() -> u32 {
        48
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}
