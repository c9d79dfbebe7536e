/// Core logging implementation with automatic filtering
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Messages above the minimum level threshold are dropped
/// 3. Debug level requires --debug-<module> for that tag
/// 4. Verbose level requires --verbose

use super::config::{get_logger_config, is_debug_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    // Rule 1: Errors always log (critical)
    if level == LogLevel::Error {
        return true;
    }

    // Rule 3: Debug level requires debug mode for that specific tag,
    // regardless of the threshold (so --debug-api works without --verbose)
    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag) || config.min_level >= LogLevel::Debug;
    }

    // Rule 4: Verbose requires the explicit --verbose flag
    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose;
    }

    // Rule 2: Check minimum level threshold
    level <= config.min_level
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::{set_logger_config, LoggerConfig};
    use std::collections::HashSet;

    #[test]
    fn test_filtering_rules() {
        let mut debug_tags = HashSet::new();
        debug_tags.insert("api".to_string());
        set_logger_config(LoggerConfig {
            min_level: LogLevel::Info,
            debug_tags,
        });

        // Errors always pass
        assert!(should_log(&LogTag::System, LogLevel::Error));
        // Info passes at default threshold
        assert!(should_log(&LogTag::Filtering, LogLevel::Info));
        // Debug only for tags with --debug-<module>
        assert!(should_log(&LogTag::Api, LogLevel::Debug));
        assert!(!should_log(&LogTag::Filtering, LogLevel::Debug));
        // Verbose requires --verbose
        assert!(!should_log(&LogTag::Api, LogLevel::Verbose));

        set_logger_config(LoggerConfig::default());
    }
}
