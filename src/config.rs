use directories::UserDirs;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::{CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS};
use crate::errors::AppError;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Base url of the trips backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Quiet period after the last keystroke before searching
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Build a config from user supplied values
    pub fn new(base_url: &str, debounce_ms: Option<u64>) -> Result<Self, AppError> {
        Ok(Self {
            base_url: validate_url(base_url)?,
            debounce_ms: debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        })
    }

    /// Path of the config file in the user's home directory
    pub fn default_path() -> Result<PathBuf, AppError> {
        UserDirs::new()
            .ok_or(AppError::NotFoundUserDir)
            .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Read the config, a missing file gives the defaults
    pub fn get_config(path_to_config: &Path) -> Result<Self, AppError> {
        if !path_to_config.exists() {
            tracing::debug!(path = %path_to_config.display(), "Config not found, using defaults");
            return Ok(Self::default());
        }
        let file = fs::File::open(path_to_config)?;
        let config: Self = serde_json::from_reader(file)?;
        Ok(Self {
            base_url: validate_url(&config.base_url)?,
            ..config
        })
    }

    /// Write the config as pretty json, creating parent directories
    pub fn save(&self, path_to_config: &Path) -> Result<(), AppError> {
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::CantCreateConfig)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path_to_config, content).map_err(|_| AppError::CantCreateConfig)?;
        tracing::info!(path = %path_to_config.display(), "Config saved");
        Ok(())
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(self, base_url: Option<&str>, debounce_ms: Option<u64>) -> Result<Self, AppError> {
        Ok(Self {
            base_url: match base_url {
                Some(value) => validate_url(value)?,
                None => self.base_url,
            },
            debounce_ms: debounce_ms.unwrap_or(self.debounce_ms),
        })
    }
}

/// Введенная строка должна быть URL
pub fn validate_url(value: &str) -> Result<String, AppError> {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let regex = URL_RE.get_or_init(|| Regex::new(r"^https?://.+$").expect("valid url regex"));
    let value = value.trim();
    if !regex.is_match(value) {
        return Err(AppError::InvalidUrl);
    }
    Ok(value.strip_suffix('/').unwrap_or(value).to_string())
}
