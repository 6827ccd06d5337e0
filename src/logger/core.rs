/// Core logging implementation with automatic filtering
///
/// Checks whether a message should be displayed for its level and tag,
/// then hands it to the formatter.
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Filtering rules:
/// 1. Errors are always shown
/// 2. Levels above the configured threshold are dropped
/// 3. Info is dropped in quiet mode
/// 4. Debug level requires debug mode for that specific tag
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Info && config.quiet {
        return false;
    }

    if level == LogLevel::Debug {
        return config.is_debug_enabled_for_tag(tag);
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(config, &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass() {
        let (quiet, _) = LoggerConfig::from_flags(&[], false, true);
        assert!(should_log(&quiet, &LogTag::Rpc, LogLevel::Error));
        assert!(!should_log(&quiet, &LogTag::Rpc, LogLevel::Info));
    }

    #[test]
    fn test_debug_gated_per_tag() {
        let (config, _) = LoggerConfig::from_flags(&["classifier".to_string()], false, false);
        assert!(should_log(&config, &LogTag::Classifier, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Seller, LogLevel::Debug));
        assert!(should_log(&config, &LogTag::Seller, LogLevel::Info));
        assert!(!should_log(&config, &LogTag::Seller, LogLevel::Verbose));
    }

    #[test]
    fn test_quiet_with_debug_tag_hides_info() {
        let (config, _) = LoggerConfig::from_flags(&["rpc".to_string()], false, true);
        assert!(!should_log(&config, &LogTag::Rpc, LogLevel::Info));
        assert!(!should_log(&config, &LogTag::Seller, LogLevel::Info));
        assert!(should_log(&config, &LogTag::Rpc, LogLevel::Debug));
        assert!(should_log(&config, &LogTag::Seller, LogLevel::Warning));
    }
}
