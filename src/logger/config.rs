/// Logger configuration
///
/// Set once at startup from the parsed command line. Until then (and in
/// tests) the default configuration is used: info and above for all tags.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

static LOGGER_CONFIG: OnceCell<LoggerConfig> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Highest level that is printed
    pub min_level: LogLevel,
    /// Tags with debug output enabled (`--debug <tag>`)
    pub debug_tags: HashSet<LogTag>,
    /// Hide info logs (`--quiet`); debug output of enabled tags still shows
    pub quiet: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            quiet: false,
        }
    }
}

impl LoggerConfig {
    /// Build a config from CLI flags. Unknown debug tags are returned so the
    /// caller can report them once logging is up.
    pub fn from_flags(debug_tags: &[String], verbose: bool, quiet: bool) -> (Self, Vec<String>) {
        let mut config = LoggerConfig::default();
        let mut unknown = Vec::new();

        for key in debug_tags {
            match LogTag::from_debug_key(key) {
                Some(tag) => {
                    config.debug_tags.insert(tag);
                }
                None => unknown.push(key.clone()),
            }
        }

        if verbose {
            config.min_level = LogLevel::Verbose;
            return (config, unknown);
        }

        config.quiet = quiet;
        if !config.debug_tags.is_empty() {
            config.min_level = LogLevel::Debug;
        } else if quiet {
            config.min_level = LogLevel::Warning;
        }

        (config, unknown)
    }

    pub fn is_debug_enabled_for_tag(&self, tag: &LogTag) -> bool {
        self.min_level == LogLevel::Verbose || self.debug_tags.contains(tag)
    }
}

/// Install the process-wide logger configuration. Only the first call wins.
pub fn set_logger_config(config: LoggerConfig) -> bool {
    LOGGER_CONFIG.set(config).is_ok()
}

pub fn get_logger_config() -> &'static LoggerConfig {
    LOGGER_CONFIG.get_or_init(LoggerConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_debug_tags() {
        let (config, unknown) = LoggerConfig::from_flags(
            &["rpc".to_string(), "bogus".to_string()],
            false,
            false,
        );
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.is_debug_enabled_for_tag(&LogTag::Rpc));
        assert!(!config.is_debug_enabled_for_tag(&LogTag::Seller));
        assert_eq!(unknown, vec!["bogus".to_string()]);
    }

    #[test]
    fn test_verbose_enables_all_tags() {
        let (config, _) = LoggerConfig::from_flags(&[], true, true);
        assert_eq!(config.min_level, LogLevel::Verbose);
        assert!(!config.quiet);
        assert!(config.is_debug_enabled_for_tag(&LogTag::Classifier));
    }

    #[test]
    fn test_quiet_raises_threshold() {
        let (config, _) = LoggerConfig::from_flags(&[], false, true);
        assert_eq!(config.min_level, LogLevel::Warning);
        assert!(config.quiet);
    }

    #[test]
    fn test_quiet_survives_debug_tags() {
        let (config, _) = LoggerConfig::from_flags(&["rpc".to_string()], false, true);
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.quiet);
        assert!(config.is_debug_enabled_for_tag(&LogTag::Rpc));
    }
}
