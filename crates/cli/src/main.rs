//! Staff Roster CLI
//!
//! Usage:
//!   roster                         - Start interactive mode
//!   roster --company "Acme"        - Name the company
//!   roster --config roster.yaml    - Load settings from a file
//!   roster --json                  - Print listings as JSON

use std::path::PathBuf;

use clap::Parser;
use cli::interactive::InteractiveCli;
use shared::{OutputFormat, RosterConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Staff roster - employees, projects and pay")]
#[command(version)]
struct Cli {
    /// Config file (.json, .yaml or .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Company name (overrides the config file)
    #[arg(long)]
    company: Option<String>,

    /// Print listings as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Config file values, overridden by flags
    fn resolve_config(&self) -> anyhow::Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::default(),
        };

        if let Some(company) = &self.company {
            config.company_name = company.clone();
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Initialize logging; RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(company = %config.company_name, output = ?config.output, "Starting roster shell");

    let mut interactive = InteractiveCli::new(&config);
    interactive.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"companyName": "FromFile", "output": "text"}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["roster", "--config", path.as_str(), "--company", "Acme", "--json"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::try_parse_from(["roster", "-c", "/nonexistent/roster.json"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
