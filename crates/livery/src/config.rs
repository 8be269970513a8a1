//! Application configuration.
//!
//! A config file is looked up in this order, first match wins:
//!
//! 1. the path given with `--config`
//! 2. `./livery.toml`
//! 3. `<config_dir>/livery/config.toml` (XDG on Linux, AppData on Windows)
//!
//! Whatever the file leaves out comes from the built-in defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = "livery.toml";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read config \"{}\": {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("invalid config \"{}\": {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per brand.
    pub brands_dir: PathBuf,
    /// Shared section baseline document.
    pub shared_sections: PathBuf,
}

/// A config file as written: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    #[serde(default)]
    paths: PathsFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsFile {
    brands_dir: Option<PathBuf>,
    shared_sections: Option<PathBuf>,
}

impl AppConfig {
    /// Resolves and loads the config file, merged over built-in defaults.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = [Some(PathBuf::from(LOCAL_CONFIG_FILE)), Self::user_config_path()];
        match candidates.into_iter().flatten().find(|path| path.is_file()) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads one config file over the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses config text over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let mut config = Self::default();
        if let Some(level) = file.log_level {
            config.log_level = level;
        }
        if let Some(dir) = file.paths.brands_dir {
            config.paths.brands_dir = dir;
        }
        if let Some(shared) = file.paths.shared_sections {
            config.paths.shared_sections = shared;
        }
        Ok(config)
    }

    /// Applies command-line path overrides.
    pub fn with_paths(mut self, brands_dir: Option<PathBuf>, shared_sections: Option<PathBuf>) -> Self {
        if let Some(dir) = brands_dir {
            self.paths.brands_dir = dir;
        }
        if let Some(shared) = shared_sections {
            self.paths.shared_sections = shared;
        }
        self
    }

    /// Path to the user config file, when the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "livery").map(|d| d.config_dir().join("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
