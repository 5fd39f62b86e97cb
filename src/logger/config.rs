/// Logger configuration and command-line driven setup
///
/// The configuration is a process-wide value behind a `parking_lot::RwLock`.
/// `init_from_args` fills it from the raw argument list (see `crate::arguments`).
use std::collections::HashSet;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::levels::LogLevel;
use crate::arguments;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (Error is always shown)
    pub min_level: LogLevel,
    /// Tags with `--debug-<key>` set
    pub debug_tags: HashSet<String>,
    /// Mirror console output into the daily log file
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            file_logging: true,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

/// Build the logger configuration from the global argument list
pub fn init_from_args() {
    set_logger_config(config_from_args(&arguments::get_cmd_args()));
}

/// Pure variant of [`init_from_args`]
pub fn config_from_args(args: &[String]) -> LoggerConfig {
    let mut config = LoggerConfig::default();

    for module in arguments::debug_modules_in(args) {
        config.debug_tags.insert(module);
    }

    if !config.debug_tags.is_empty() {
        config.min_level = LogLevel::Debug;
    }
    if arguments::has_arg_in(args, "--verbose") {
        config.min_level = LogLevel::Verbose;
    }
    if arguments::has_arg_in(args, "--quiet") {
        config.min_level = LogLevel::Warning;
    }
    if arguments::has_arg_in(args, "--no-log-file") {
        config.file_logging = false;
    }

    if let Some(level) = arguments::arg_value_in(args, "--log-level") {
        if let Ok(level) = level.parse::<LogLevel>() {
            config.min_level = level;
        }
    }

    config
}
