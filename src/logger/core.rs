/// Core logging implementation with automatic filtering
///
/// Decides whether a message is shown, then hands it to `format` for output.
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Anything above the minimum level is dropped
/// 3. Debug requires `--debug-<tag>` (or `--verbose`)
/// 4. Verbose requires `--verbose`
pub fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return config.min_level == LogLevel::Verbose
            || config.debug_tags.contains(tag.to_debug_key());
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log_with(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message, config.file_logging);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(min_level: LogLevel, debug: &[&str]) -> LoggerConfig {
        let mut config = LoggerConfig::default();
        config.min_level = min_level;
        config.debug_tags = debug.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_errors_always_logged() {
        let config = config_with(LogLevel::Error, &[]);
        assert!(should_log_with(&config, &LogTag::Webserver, LogLevel::Error));
        assert!(!should_log_with(&config, &LogTag::Webserver, LogLevel::Warning));
    }

    #[test]
    fn test_debug_requires_tag_flag() {
        let config = config_with(LogLevel::Debug, &["directory"]);
        assert!(should_log_with(&config, &LogTag::Directory, LogLevel::Debug));
        assert!(!should_log_with(&config, &LogTag::Webserver, LogLevel::Debug));
    }

    #[test]
    fn test_verbose_gated() {
        let config = config_with(LogLevel::Debug, &["directory"]);
        assert!(!should_log_with(&config, &LogTag::Directory, LogLevel::Verbose));

        let config = config_with(LogLevel::Verbose, &[]);
        assert!(should_log_with(&config, &LogTag::Directory, LogLevel::Verbose));
    }

    #[test]
    fn test_verbose_shows_every_debug_tag() {
        let config = config_with(LogLevel::Verbose, &[]);
        assert!(should_log_with(&config, &LogTag::Webserver, LogLevel::Debug));
        assert!(should_log_with(&config, &LogTag::System, LogLevel::Info));
    }
}
