//! Configuration management.
//!
//! The export reads two delimiters: the host's global multi-value separator,
//! which joins the `key=value` pairs of one component, and the component
//! separator, which joins components inside one cell. Both can be set in a
//! TOML file:
//!
//! ```toml
//! [export]
//! multi_value_separator = ";"
//!
//! [logging]
//! filter = "downloadable_export=debug"
//! format = "json"
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Host default for the global multi-value separator.
pub const DEFAULT_MULTI_VALUE_SEPARATOR: char = ',';

/// Separator between components of one cell.
pub const DEFAULT_COMPONENT_SEPARATOR: char = '|';

/// Environment variable overriding the multi-value separator.
pub const MULTI_VALUE_SEPARATOR_ENV: &str = "DOWNLOADABLE_EXPORT_MULTI_VALUE_SEPARATOR";

/// Delimiters used when encoding cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Joins `key=value` pairs of one component.
    pub multi_value_separator: char,
    /// Joins components of one cell.
    pub component_separator: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            multi_value_separator: DEFAULT_MULTI_VALUE_SEPARATOR,
            component_separator: DEFAULT_COMPONENT_SEPARATOR,
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Export section.
    pub export: Option<ConfigFileExport>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

/// Export section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileExport {
    /// Multi-value separator, a single character.
    pub multi_value_separator: Option<String>,
    /// Component separator, a single character.
    pub component_separator: Option<String>,
}

/// Logging section in config file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives.
    pub filter: Option<String>,
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
}

impl ConfigFile {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })
    }
}

impl ExportConfig {
    /// Creates a configuration with the host defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the multi-value separator.
    #[must_use]
    pub const fn with_multi_value_separator(mut self, separator: char) -> Self {
        self.multi_value_separator = separator;
        self
    }

    /// Sets the component separator.
    #[must_use]
    pub const fn with_component_separator(mut self, separator: char) -> Self {
        self.component_separator = separator;
        self
    }

    /// Checks that the delimiters can be told apart.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the separators are equal or either
    /// one is `=`.
    pub fn validate(&self) -> Result<()> {
        if self.multi_value_separator == self.component_separator {
            return Err(Error::InvalidInput(format!(
                "multi-value separator and component separator are both '{}'",
                self.multi_value_separator
            )));
        }
        for (name, separator) in [
            ("multi-value", self.multi_value_separator),
            ("component", self.component_separator),
        ] {
            if separator == '=' {
                return Err(Error::InvalidInput(format!(
                    "{name} separator cannot be '='"
                )));
            }
        }
        Ok(())
    }

    /// Loads configuration from a file path.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the
    /// resulting separators are invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::from_config_file(ConfigFile::load(path)?)
    }

    /// Builds configuration from the defaults with environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the override is not a single valid character.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(MULTI_VALUE_SEPARATOR_ENV).ok().as_deref())
    }

    /// Applies the value of `DOWNLOADABLE_EXPORT_MULTI_VALUE_SEPARATOR`, if
    /// set, over the defaults.
    fn from_env_value(value: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = value {
            config.multi_value_separator = parse_separator(MULTI_VALUE_SEPARATOR_ENV, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Converts a `ConfigFile` to `ExportConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if a separator is not a single character or the
    /// separators are invalid together.
    pub fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(export) = file.export {
            if let Some(value) = export.multi_value_separator {
                config.multi_value_separator =
                    parse_separator("export.multi_value_separator", &value)?;
            }
            if let Some(value) = export.component_separator {
                config.component_separator = parse_separator("export.component_separator", &value)?;
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parses a separator setting that must hold exactly one character.
fn parse_separator(name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidInput(format!(
            "{name} must be a single character, got '{value}'"
        ))),
    }
}
