use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration for sluice CLI operations
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output-related configuration
    pub output: OutputConfig,
}

/// How compiled statements are printed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Appended to every statement in `sql` format
    pub terminator: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One statement per line
    #[default]
    Sql,

    /// `{"creates": [...], "inserts": [...]}`
    Json,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output configuration
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&src).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Sql,
            terminator: ";".to_string(),
        }
    }
}

impl OutputConfig {
    /// Create a new OutputConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the statement terminator
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn output_section() {
        let config = Config::from_toml(
            r#"
            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config::new().output(OutputConfig::new().format(OutputFormat::Json))
        );
    }

    #[test]
    fn terminator_can_be_empty() {
        let config = Config::from_toml("[output]\nterminator = \"\"").unwrap();

        assert_eq!(config.output.format, OutputFormat::Sql);
        assert_eq!(config.output.terminator, "");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("[output]\ncolour = true").is_err());
        assert!(Config::from_toml("[output]\nformat = \"yaml\"").is_err());
    }
}
