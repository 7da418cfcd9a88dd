//! Structured logging configuration.

use crate::config::LoggingSettings;

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "downloadable_export=info";

/// Environment variable holding `EnvFilter` directives for this crate.
pub const LOG_FILTER_ENV: &str = "DOWNLOADABLE_EXPORT_LOG";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to pretty output.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_settings(None)
    }

    /// Builds logging configuration from config settings with env overrides.
    ///
    /// Filter precedence: `DOWNLOADABLE_EXPORT_LOG`, then `RUST_LOG`, then the
    /// config file, then the default.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>) -> Self {
        Self::resolve(
            settings,
            std::env::var(LOG_FILTER_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        crate_filter: Option<String>,
        rust_log: Option<String>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(settings) = settings {
            if let Some(filter) = &settings.filter {
                config.filter.clone_from(filter);
            }
            if let Some(format) = &settings.format {
                config.format = LogFormat::parse(format);
            }
        }

        let env_filter = [crate_filter, rust_log]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty());
        if let Some(filter) = env_filter {
            config.filter = filter;
        }

        config
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    fn settings(filter: Option<&str>, format: Option<&str>) -> LoggingSettings {
        LoggingSettings {
            filter: filter.map(str::to_string),
            format: format.map(str::to_string),
        }
    }

    fn env(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_filter_defaults_without_settings_or_env() {
        let config = LoggingConfig::resolve(None, None, None);
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_filter_from_settings() {
        let file = settings(Some("downloadable_export=debug"), Some("json"));
        let config = LoggingConfig::resolve(Some(&file), None, None);

        assert_eq!(config.filter, "downloadable_export=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_filter_precedence() {
        let file = settings(Some("downloadable_export=debug"), None);

        let config = LoggingConfig::resolve(Some(&file), None, env("warn"));
        assert_eq!(config.filter, "warn");

        let config = LoggingConfig::resolve(
            Some(&file),
            env("downloadable_export=trace"),
            env("warn"),
        );
        assert_eq!(config.filter, "downloadable_export=trace");
    }

    #[test]
    fn test_blank_env_filter_is_ignored() {
        let file = settings(Some("downloadable_export=debug"), None);

        let config = LoggingConfig::resolve(Some(&file), env("  "), env("warn"));
        assert_eq!(config.filter, "warn");

        let config = LoggingConfig::resolve(Some(&file), env(""), None);
        assert_eq!(config.filter, "downloadable_export=debug");
    }

    #[test]
    fn test_builders() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_filter("downloadable_export=trace");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "downloadable_export=trace");
    }
}
