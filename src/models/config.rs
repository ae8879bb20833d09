use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional YAML config file
pub const CONFIG_ENV_VAR: &str = "WALCOLORS_CONFIG";

/// Application configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// ImageMagick invocation prefix, e.g. `["magick", "convert"]`.
    /// Auto-detected on PATH when unset.
    #[serde(default)]
    pub magick_command: Option<Vec<String>>,

    /// schemer2 invocation prefix, e.g. `["/opt/bin/schemer2"]`.
    /// Looked up on PATH when unset.
    #[serde(default)]
    pub schemer2_command: Option<Vec<String>>,

    /// Longest edge, in pixels, of the thumbnail native backends sample
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,

    /// Sample every n-th pixel in the colorthief backend
    #[serde(default = "default_colorthief_quality")]
    pub colorthief_quality: u32,

    /// How many increasing color counts the wal backend tries
    #[serde(default = "default_wal_attempts")]
    pub wal_attempts: u32,
}

fn default_thumbnail_size() -> u32 {
    200
}

fn default_colorthief_quality() -> u32 {
    10
}

fn default_wal_attempts() -> u32 {
    20
}

impl AppConfig {
    /// Load configuration from the file named by `WALCOLORS_CONFIG`, if any
    pub fn load() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(PathBuf::from(path)),
            None => Self::default(),
        }
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            magick_command: None,
            schemer2_command: None,
            thumbnail_size: default_thumbnail_size(),
            colorthief_quality: default_colorthief_quality(),
            wal_attempts: default_wal_attempts(),
        }
    }
}
