/*!
 * Configuration support for the Surabaya NIK library
 *
 * Runtime configuration for the CLI shell and data loading. The decoder
 * itself takes no configuration; the day offset and year pivot are fixed
 * national conventions exposed as constants, not settings.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the NIK tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NikConfig {
    /// Directory holding the standard registry layout
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Whether the CLI renders colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Whether missing registry files abort loading or load as empty maps
    #[serde(default)]
    pub require_registry_files: bool,
}

impl Default for NikConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            color_output: default_color_output(),
            require_registry_files: false,
        }
    }
}

// Default value functions for serde
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_color_output() -> bool {
    true
}

impl NikConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `NIK_DATA_DIR`: directory holding the registry files
    /// - `NIK_COLOR`: "true" or "false"
    /// - `NIK_REQUIRE_REGISTRY`: "true" or "false"
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("NIK_DATA_DIR") {
            config.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("NIK_COLOR") {
            config.color_output = val.to_lowercase() == "true";
        }

        if let Ok(val) = std::env::var("NIK_REQUIRE_REGISTRY") {
            config.require_registry_files = val.to_lowercase() == "true";
        }

        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| crate::NikError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                suggestion: Some("Check that the file is valid TOML format".to_string()),
            })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::NikError::Configuration {
                message: format!("Failed to serialize config: {}", e),
                suggestion: None,
            })?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns `~/.config/nik-surabaya/config.toml` on Unix-like systems
    /// or the platform equivalent elsewhere.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "nik-surabaya")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, environment, or defaults
    ///
    /// Priority order:
    /// 1. Default config file (if exists)
    /// 2. Environment variables
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::from_file(&config_path) {
                    return config;
                }
            }
        }

        Self::from_env()
    }
}

// Global configuration support
use std::sync::RwLock;

lazy_static::lazy_static! {
    static ref GLOBAL_CONFIG: RwLock<Option<NikConfig>> = RwLock::new(None);
}

/// Set the global configuration
pub fn set_global_config(config: NikConfig) {
    *GLOBAL_CONFIG.write().unwrap() = Some(config);
}

/// Get the global configuration (or default if not set)
pub fn global_config() -> NikConfig {
    GLOBAL_CONFIG.read().unwrap()
        .as_ref()
        .cloned()
        .unwrap_or_else(NikConfig::load)
}

/// Clear the global configuration
pub fn clear_global_config() {
    *GLOBAL_CONFIG.write().unwrap() = None;
}

/// Builder for customizing configuration
pub struct ConfigBuilder {
    config: NikConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: NikConfig::default(),
        }
    }

    /// Set the registry data directory
    pub fn data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set colored output
    pub fn color_output(mut self, enabled: bool) -> Self {
        self.config.color_output = enabled;
        self
    }

    /// Set whether missing registry files are an error
    pub fn require_registry_files(mut self, require: bool) -> Self {
        self.config.require_registry_files = require;
        self
    }

    /// Build the configuration
    pub fn build(self) -> NikConfig {
        self.config
    }
}
