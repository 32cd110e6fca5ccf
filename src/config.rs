//! titlecast.toml configuration
//!
//! Controls how spreadsheet exports are parsed and how results are printed.
//! Prediction policy (threshold, minimum samples) is fixed and not part of
//! the configuration.
//!
//! # Example titlecast.toml
//!
//! ```toml
//! [parser]
//! min_title_digits = 5
//! skip_suffixed = true
//! delimiter = ";"
//! has_header = true
//!
//! [output]
//! format = "json"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Record parser settings
///
/// # Example
/// ```
/// use titlecast::config::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert_eq!(config.min_title_digits, 1);
/// assert_eq!(ParserConfig::strict().min_title_digits, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Shortest digit run accepted as the title number
    ///
    /// The title number is the last run of at least this many digits in the
    /// title cell; any text before it becomes the category label.
    /// - 1 (default): any trailing number is the title number
    /// - 5 (strict): short numbers such as flat numbers stay in the label
    pub min_title_digits: usize,

    /// Skip rows whose house cell carries a letter suffix (`12A`)
    ///
    /// Lettered houses are usually infill plots numbered outside the regular
    /// sequence. Default: true
    pub skip_suffixed: bool,

    /// Cell delimiter; detected from the first line when unset
    pub delimiter: Option<char>,

    /// Always skip the first line
    pub has_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_title_digits: 1,
            skip_suffixed: true,
            delimiter: None,
            has_header: false,
        }
    }
}

impl ParserConfig {
    /// Only accept title numbers of five or more digits
    pub fn strict() -> Self {
        Self {
            min_title_digits: 5,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_title_digits == 0 {
            return Err("min_title_digits must be >= 1, got 0".to_string());
        }

        if let Some(d) = self.delimiter {
            if d == '"' || d == '\n' || d == '\r' {
                return Err(format!("delimiter cannot be {:?}", d));
            }
        }

        Ok(())
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Root configuration for titlecast.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use titlecast::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_file("titlecast.toml")?;
    /// println!("min title digits: {}", config.parser.min_title_digits);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.parser.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.parser.min_title_digits, 1);
        assert!(config.parser.skip_suffixed);
        assert_eq!(config.parser.delimiter, None);
        assert!(!config.parser.has_header);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_parser_config() {
        let config = ParserConfig::strict();
        assert_eq!(config.min_title_digits, 5);
        assert!(config.skip_suffixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [parser]
            min_title_digits = 5
            skip_suffixed = false
            delimiter = ";"
            has_header = true

            [output]
            format = "json"
        "#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.parser.min_title_digits, 5);
        assert!(!config.parser.skip_suffixed);
        assert_eq!(config.parser.delimiter, Some(';'));
        assert!(config.parser.has_header);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str("[parser]\nhas_header = true\n").unwrap();
        assert!(config.parser.has_header);
        assert_eq!(config.parser.min_title_digits, 1);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_toml() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_min_title_digits() {
        let result = Config::from_toml_str("[parser]\nmin_title_digits = 0\n");
        assert!(result.is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_delimiter() {
        let mut config = ParserConfig::default();
        config.delimiter = Some('"');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_format() {
        assert!(Config::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titlecast.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/titlecast.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
