use super::schemas::Config;
/// Configuration utilities - loading, saving, and access helpers
///
/// The loaded configuration lives in a process-wide `OnceCell`; reads go
/// through [`with_config`]. Parsing is split from installation so callers
/// (and tests) can work with a `Config` value without touching the global.
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use std::path::Path;

use crate::logger::{self, LogTag};

/// Global configuration instance
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Served by `with_config` before `load_config_from_path` has run
static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Parse a configuration file
///
/// A missing file is not an error: defaults are returned and a warning logged.
pub fn read_config_file(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

    parse_config(&contents)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str::<Config>(contents).map_err(|e| e.to_string())
}

/// Load configuration from a specific file path into the global CONFIG
pub fn load_config_from_path(path: &Path) -> Result<(), String> {
    let config = read_config_file(path)?;
    install_config(config)?;

    logger::debug(
        LogTag::Config,
        &format!("Configuration loaded from {}", path.display()),
    );
    Ok(())
}

/// Install an already-built configuration as the global CONFIG
pub fn install_config(config: Config) -> Result<(), String> {
    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())
}

/// Execute a function with read access to the configuration
///
/// Falls back to the built-in defaults when nothing was loaded yet.
///
/// ```rust,ignore
/// let port = with_config(|cfg| cfg.webserver.port);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => f(&*lock.read()),
        None => f(&*DEFAULT_CONFIG),
    }
}

/// Clone of the entire configuration, for use across await points
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}

/// Serialize a configuration to pretty TOML
pub fn render_config(config: &Config) -> Result<String, String> {
    toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

/// Write a configuration to disk as TOML, creating parent directories
pub fn save_config(config: &Config, path: &Path) -> Result<(), String> {
    let config_str = render_config(config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }

    std::fs::write(path, config_str)
        .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

    logger::info(
        LogTag::Config,
        &format!("Configuration written to {}", path.display()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.webserver.port, 8000);
        assert_eq!(config.directory.default_limit, 10);
        assert_eq!(config.directory.id_strategy, IdStrategy::Monotonic);
        assert!(!config.directory.strict_sort);
        assert!(!config.directory.enforce_blockchain_refs);
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = render_config(&Config::default()).unwrap();
        assert!(toml_str.contains("[webserver]"));
        assert!(toml_str.contains("[directory]"));
        assert!(toml_str.contains("id_strategy = \"monotonic\""));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            "[directory]\nid_strategy = \"max_plus_one\"\nstrict_sort = true\n",
        )
        .unwrap();
        assert_eq!(config.directory.id_strategy, IdStrategy::MaxPlusOne);
        assert!(config.directory.strict_sort);
        assert_eq!(config.directory.max_limit, 0);
        assert_eq!(config.webserver.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        assert!(parse_config("[directory]\nid_strategy = \"uuid\"\n").is_err());
    }

    #[test]
    fn test_read_missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = read_config_file(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.webserver.port = 9200;
        config.directory.id_strategy = IdStrategy::MaxPlusOne;
        config.directory.max_limit = 50;
        save_config(&config, &path).unwrap();

        assert_eq!(read_config_file(&path).unwrap(), config);
    }

    #[test]
    fn test_read_file_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[webserver]\nport = 9100\n").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.webserver.port, 9100);
    }
}
