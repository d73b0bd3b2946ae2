//! User configuration persistence.
//!
//! A small JSON object stored at `<user config dir>/keysnap/config.json`.
//! A missing file is a default configuration, not an error. Saves go through
//! a temp file in the same directory plus a rename so a crash mid-write
//! never leaves a partial config behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory where screenshots are saved. Empty means "fall back to
    /// other sources" (flag/env/built-in default).
    pub output_dir: String,

    /// Show a post-capture dialog to preview, name, and Save/Discard
    /// before writing the file.
    pub post_capture_prompt: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config path is empty")]
    EmptyPath,

    #[error("failed to read/write config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_json::Error),
}

/// Per-user config file path: `<user config dir>/keysnap/config.json`.
/// `None` when the platform reports no config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("keysnap").join("config.json"))
}

/// Loads the config from `path`. A missing file yields the default config.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath);
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `config` to `path` as pretty-printed JSON, creating parent
/// directories as needed. Atomic via temp file + rename.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath);
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    json.push('\n');

    let tmp = dir.join(format!("config-{}.tmp", std::process::id()));
    if let Err(e) = fs::write(&tmp, json) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    if let Err(e) = replace_file(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

/// Rename that also works where a plain rename won't replace an existing
/// destination (Windows): retry after removing the destination.
fn replace_file(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(first) => {
            let _ = fs::remove_file(dest);
            fs::rename(src, dest).map_err(|_| first)
        }
    }
}
