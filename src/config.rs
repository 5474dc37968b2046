//! Optional run settings, read from `lambda_lesson.toml`.
//!
//! Every field has a default, so a missing or empty file reproduces the
//! standard transcript.

use crate::error::{LessonError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "lambda_lesson.toml";

/// Which label set the transcript is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

/// Where the settings in effect came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub language: Language,
    pub color: bool,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: Language::Ko,
            color: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| LessonError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LessonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content, path)?;
        info!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Loads `dir/lambda_lesson.toml` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<(Self, ConfigSource)> {
        let path: PathBuf = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            let settings = Self::load(&path)?;
            Ok((settings, ConfigSource::File(path)))
        } else {
            debug!(dir = %dir.display(), "no config file, using defaults");
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }
}
