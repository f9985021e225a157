//! Configuration types for the roster shell

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// How the shell renders listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Shell configuration (roster.json / roster.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterConfig {
    /// Company whose staff is being managed
    pub company_name: String,

    /// Listing format
    pub output: OutputFormat,

    /// `EnvFilter` directive used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            company_name: "Company".to_string(),
            output: OutputFormat::Text,
            log_filter: None,
        }
    }
}

impl RosterConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let content = std::fs::read_to_string(path)?;
        let config: Self = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_parse_json() {
        let file = write_config(
            ".json",
            r#"{
                "companyName": "dhylanc.a",
                "output": "json",
                "logFilter": "roster_usecase=debug"
            }"#,
        );

        let config = RosterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.company_name, "dhylanc.a");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter.as_deref(), Some("roster_usecase=debug"));
    }

    #[test]
    fn test_config_parse_yaml() {
        let file = write_config(".yaml", "companyName: Acme\n");

        let config = RosterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RosterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".toml", "companyName = 'Acme'");

        let result = RosterConfig::from_file(file.path());
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { extension }) if extension == "toml"
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RosterConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config(".json", "{ not json");
        assert!(matches!(
            RosterConfig::from_file(file.path()),
            Err(ConfigError::Json(_))
        ));
    }
}
