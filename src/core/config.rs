//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive
    /// Example: info,admybrand=debug
    pub log_filter: Option<String>,

    /// Raw `COMPRESSION` value; `0`, `false`, `off` or `no` disable compression
    pub compression: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").ok(),
            compression: std::env::var("COMPRESSION").ok(),
        }
    }

    /// Check if a log filter is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Log filter, falling back to [`DEFAULT_LOG_FILTER`]
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Whether responses should be compressed (on unless explicitly disabled)
    pub fn compression_enabled(&self) -> bool {
        match self.compression.as_deref() {
            None => true,
            Some(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_filter: Option<&str>, compression: Option<&str>) -> Config {
        Config {
            log_filter: log_filter.map(str::to_string),
            compression: compression.map(str::to_string),
        }
    }

    #[test]
    fn test_log_filter_default() {
        let config = config(None, None);
        assert!(!config.has_log_filter());
        assert_eq!(config.log_filter_or_default(), "info");
    }

    #[test]
    fn test_log_filter_explicit() {
        let config = config(Some("debug,hyper=warn"), None);
        assert!(config.has_log_filter());
        assert_eq!(config.log_filter_or_default(), "debug,hyper=warn");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        assert_eq!(config(Some("  "), None).log_filter_or_default(), "info");
    }

    #[test]
    fn test_compression_enabled_by_default() {
        assert!(config(None, None).compression_enabled());
        assert!(config(None, Some("1")).compression_enabled());
        assert!(config(None, Some("true")).compression_enabled());
    }

    #[test]
    fn test_compression_disabled() {
        for value in ["0", "false", "FALSE", " off ", "no"] {
            assert!(!config(None, Some(value)).compression_enabled(), "{value}");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment
        let config = Config::from_env();
        let _ = config.log_filter_or_default();
        let _ = config.compression_enabled();
    }
}
