use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "quickrun";
const CONFIG_FILE_NAME: &str = "config.toml";
const HISTORY_FILE_NAME: &str = "history.txt";

pub const DEFAULT_HISTORY_LIMIT: usize = 200;
pub const MAX_HISTORY_LIMIT: usize = DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history_path: PathBuf,
    pub history_limit: usize,
    pub max_visible_candidates: u16,
    pub file_manager: String,
    pub shell: String,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: stable_app_data_dir().join(HISTORY_FILE_NAME),
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_visible_candidates: 8,
            file_manager: "dolphin".to_string(),
            shell: "bash".to_string(),
            config_path: default_config_path(),
        }
    }
}

/// Per-user data directory for history and logs. Falls back to the temp dir
/// on systems without a resolvable data dir.
pub fn stable_app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Loads the config file at `path` (or the default location). A missing file
/// yields defaults; fields absent from the file keep their defaults.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config {
                config_path: path,
                ..Config::default()
            });
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let mut config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    config.config_path = path;
    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = &config.config_path;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let encoded = toml::to_string_pretty(config)?;
    std::fs::write(path, encoded).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.history_limit == 0 || cfg.history_limit > MAX_HISTORY_LIMIT {
        return Err("history_limit out of range".into());
    }

    if cfg.max_visible_candidates == 0 || cfg.max_visible_candidates > 50 {
        return Err("max_visible_candidates out of range".into());
    }

    if cfg.history_path.as_os_str().is_empty() {
        return Err("history_path is required".into());
    }

    if cfg.file_manager.trim().is_empty() {
        return Err("file_manager is required".into());
    }

    if cfg.shell.trim().is_empty() {
        return Err("shell is required".into());
    }

    Ok(())
}
