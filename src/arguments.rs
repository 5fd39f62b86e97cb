/// Centralized command-line flag scanning for the token directory
///
/// `main.rs` parses the typed options with clap; this module keeps a copy of the raw
/// argument list so the logger (and anything else initialized before or without the
/// clap struct) can check `--debug-<module>` style flags.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        // Poisoned mutex: fall back to the process arguments
        Err(_) => env::args().collect(),
    }
}

pub fn has_arg_in(args: &[String], arg: &str) -> bool {
    args.iter().any(|a| a == arg)
}

pub fn arg_value_in(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{}=", flag);
    for (i, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
        if arg == flag {
            return args.get(i + 1).cloned();
        }
    }
    None
}

/// Debug modules enabled in the given argument list (`--debug-webserver` → "webserver")
pub fn debug_modules_in(args: &[String]) -> Vec<String> {
    args.iter()
        .filter_map(|a| a.strip_prefix("--debug-"))
        .filter(|m| !m.is_empty())
        .map(|m| m.to_lowercase())
        .collect()
}

// =============================================================================
// FLAG CHECKING FUNCTIONS
// =============================================================================

pub fn is_verbose_enabled() -> bool {
    has_arg_in(&get_cmd_args(), "--verbose")
}

/// Print which debug modes are active (startup banner helper)
pub fn print_debug_info() {
    let modules = debug_modules_in(&get_cmd_args());
    if modules.is_empty() && !is_verbose_enabled() {
        return;
    }
    println!("🐛 Debug modes: {}", modules.join(", "));
    if is_verbose_enabled() {
        println!("🔍 Verbose logging enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_has_arg() {
        let a = args(&["token-directory", "--debug-webserver"]);
        assert!(has_arg_in(&a, "--debug-webserver"));
        assert!(!has_arg_in(&a, "--debug-directory"));
    }

    #[test]
    fn test_get_arg_value() {
        let a = args(&["token-directory", "--port", "9000", "--host=0.0.0.0"]);
        assert_eq!(arg_value_in(&a, "--port"), Some("9000".to_string()));
        assert_eq!(arg_value_in(&a, "--host"), Some("0.0.0.0".to_string()));
        assert_eq!(arg_value_in(&a, "--config"), None);
    }

    #[test]
    fn test_trailing_flag_has_no_value() {
        let a = args(&["token-directory", "--port"]);
        assert_eq!(arg_value_in(&a, "--port"), None);
    }

    #[test]
    fn test_debug_modules() {
        let a = args(&["token-directory", "--debug-Webserver", "--debug-", "--verbose"]);
        assert_eq!(debug_modules_in(&a), vec!["webserver".to_string()]);
    }
}
