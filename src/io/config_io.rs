use std::fs;
use std::path::Path;

use crate::model::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "tasklight.toml";

/// Read a config file. The file must exist; callers decide whether a
/// missing file is an error (see [`load_default`]).
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&text)?;
    Ok(config)
}

/// Load `tasklight.toml` from the current directory if present; a missing
/// file means built-in defaults. Invalid TOML is still an error.
pub fn load_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_config(path)
}
