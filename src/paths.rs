//! Centralized path resolution for the token directory
//!
//! The base directory follows platform conventions unless `TOKEN_DIRECTORY_HOME`
//! points somewhere else:
//! - **macOS**: `~/Library/Application Support/TokenDirectory/`
//! - **Windows**: `%LOCALAPPDATA%\TokenDirectory\`
//! - **Linux**: `$XDG_DATA_HOME/TokenDirectory/` (fallback `~/.local/share/TokenDirectory/`)
//!
//! ```text
//! TokenDirectory/
//! ├── data/
//! │ └── config.toml
//! └── logs/
//!   └── token_directory_*.log
//! ```

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "TOKEN_DIRECTORY_HOME";

const APP_DIR: &str = "TokenDirectory";

static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

fn resolve_base_directory() -> PathBuf {
    if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
        if !custom.trim().is_empty() {
            return PathBuf::from(custom);
        }
    }

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

/// Returns the base directory for all token directory files
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Returns the data directory path (config lives here)
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

/// Returns the default configuration file path
pub fn get_config_path() -> PathBuf {
    get_data_directory().join("config.toml")
}

/// Create the data and logs directories if missing
///
/// Must run before `logger::init()` since file logging opens its file eagerly.
pub fn ensure_all_directories() -> Result<(), String> {
    for dir in [get_data_directory(), get_logs_directory()] {
        ensure_directory(&dir)?;
    }
    Ok(())
}

fn ensure_directory(dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory '{}': {}", dir.display(), e))
}
