//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NDC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Starting geometry
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Animation clock
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Bundle export
    #[serde(default)]
    pub export: ExportConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NDC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NDC_GEOMETRY__DIMENSION=5 -> geometry.dimension = 5
        figment = figment.merge(Env::prefixed("NDC_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Starting dimension and angle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Hypercube dimension (at least 2)
    pub dimension: i64,
    /// Starting rotation angle in radians
    pub theta: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            dimension: 4,
            theta: 0.0,
        }
    }
}

/// Animation clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Angle added per frame, in radians
    pub angle_step: f64,
    /// Number of frames to run
    pub frames: u32,
    /// Target frames per second (0 runs unpaced)
    pub frame_rate: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.01,
            frames: 120,
            frame_rate: 60.0,
        }
    }
}

/// Where to write the final bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// RON output path; no export when unset
    pub path: Option<String>,
    /// Pretty-print the RON output
    pub pretty: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.geometry.dimension, 4);
        assert_eq!(config.animation.frames, 120);
        assert!(config.export.path.is_none());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("dimension"));
        assert!(toml.contains("angle_step"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[geometry]\ndimension = 6\n").unwrap();
        assert_eq!(config.geometry.dimension, 6);
        assert_eq!(config.geometry.theta, 0.0);
        assert_eq!(config.animation.angle_step, 0.01);
    }

    #[test]
    fn test_load_from_missing_dir_gives_defaults() {
        let config = AppConfig::load_from("/nonexistent/config/dir").unwrap();
        assert_eq!(config.animation.frame_rate, 60.0);
    }
}
