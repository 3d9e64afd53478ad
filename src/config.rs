//! Mission config file handling.
//!
//! An explicit `--config` path must exist and parse. Without one,
//! `~/.agent-studio/mission.toml` is used if present, and the built-in
//! default mission otherwise. Nothing is ever written back — the file is
//! input, not persistence.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::model::MissionConfig;

/// Errors loading a mission config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid mission config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads the mission config, falling back to defaults when no file exists.
pub fn load_mission(explicit: Option<&Path>) -> Result<MissionConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(MissionConfig::default()),
    }
}

/// The default config file path: `~/.agent-studio/mission.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".agent-studio").join("mission.toml"))
}

fn load_from(path: &Path) -> Result<MissionConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
