/// Logger configuration derived from command-line arguments
///
/// Scans CMD_ARGS once at init for:
/// - `--debug-<module>` flags enabling Debug output per tag
/// - `--verbose` raising the minimum level to Verbose
/// - `--quiet` lowering the minimum level to Error

use super::tags::LogTag;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

use super::levels::LogLevel;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level shown on the console (errors always pass)
    pub min_level: LogLevel,
    /// Tags with --debug-<module> enabled
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<Mutex<LoggerConfig>> =
    Lazy::new(|| Mutex::new(LoggerConfig::default()));

/// Build the configuration from command-line arguments
pub fn init_from_args() {
    let args = get_cmd_args();

    let mut config = LoggerConfig::default();

    for arg in &args {
        if let Some(module) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(module.to_string());
        }
    }

    if args.iter().any(|a| a == "--verbose" || a == "-v") {
        config.min_level = LogLevel::Verbose;
    } else if args.iter().any(|a| a == "--quiet" || a == "-q") {
        config.min_level = LogLevel::Error;
    }

    set_logger_config(config);
}

/// Get a snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .lock()
        .map(|c| c.clone())
        .unwrap_or_default()
}

/// Replace the logger configuration (used by init and tests)
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.lock() {
        *current = config;
    }
}

/// Whether --debug-<module> was passed for this tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.debug_tags.contains(&tag.to_debug_key())
}
