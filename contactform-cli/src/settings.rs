//! CLI settings loaded from TOML.
//!
//! ```toml
//! endpoint = "https://college.example.edu/contact/"
//!
//! [form]
//! banner_ms = 5000
//! toast_ms = 3000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use contactform_lib::FormConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::paths;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where submissions are posted.
    pub endpoint: Option<Url>,
    /// Form behaviour.
    pub form: FormConfig,
}

impl Settings {
    /// Load settings from `path`, or from the default config file if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
