//! Endpoint configuration in `<config_dir>/listfold/config.toml`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for listfold config within the user config dir.
const CONFIG_DIR: &str = "listfold";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Read endpoint used when no config file exists.
pub const DEFAULT_ENDPOINT: &str = "https://apis.ccbp.in/list-creation/lists";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Endpoint the item collection is fetched from
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Get the default path of the config file.
///
/// `None` when the platform exposes no user config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from the given path.
///
/// Returns the default config if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}

/// Save config to the given path.
///
/// Creates parent directories if they don't exist.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::Config(format!("failed to create {}: {e}", dir.display())))?;
        }
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;

    // Add header comment
    let content_with_header =
        format!("# listfold configuration\n# Edit the endpoint to read from a different source\n\n{content}");

    fs::write(path, content_with_header)
        .map_err(|e| Error::Config(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}
