//! Configuration loading for the taskboard CLI
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.yml`, `taskboard.json`
//!    in the configuration directory
//! 3. Environment variables with the `TASKBOARD_` prefix
//! 4. Command line arguments

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// File stem searched for in the configuration directory
pub const CONFIG_FILE_STEM: &str = "taskboard";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration source could not be parsed or extracted
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: Box<figment::Error> },

    /// Invalid configuration value
    #[error("Invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

/// How the final board is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Start from the demo board instead of an empty one
    pub seed: bool,
    pub output: OutputFormat,
    /// Filter directive used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: true,
            output: OutputFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

/// Loads [`CliConfig`] from a directory, the environment and overrides.
///
/// No caching is performed; every call reads the sources again.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Build and extract the merged configuration
    pub fn load(&self, overrides: &CliOverrides) -> Result<CliConfig, ConfigError> {
        let config: CliConfig = self.figment(overrides).extract()?;
        validate(&config)?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn figment(&self, overrides: &CliOverrides) -> Figment {
        Figment::from(Serialized::defaults(CliConfig::default()))
            .merge(self.config_files())
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    /// Every config file present in the directory, lowest priority first
    fn config_files(&self) -> Figment {
        let mut figment = Figment::new();
        for ext in ["toml", "yaml", "yml", "json"] {
            let path = self.dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
            if !path.is_file() {
                continue;
            }
            trace!(path = %path.display(), "loading config file");
            figment = match ext {
                "toml" => figment.merge(Toml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => figment.merge(Yaml::file(path)),
            };
        }
        figment
    }
}

fn validate(config: &CliConfig) -> Result<(), ConfigError> {
    if config.log_level.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "log_level".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::new(dir.path())
            .load(&CliOverrides::default())
            .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    #[serial]
    fn test_file_values_are_loaded() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("taskboard.yaml"),
            "seed: false\noutput: json\nlog_level: debug\n",
        )
        .unwrap();

        let config = ConfigLoader::new(dir.path())
            .load(&CliOverrides::default())
            .unwrap();
        assert!(!config.seed);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_json_overrides_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.toml"), "output = \"json\"\nseed = false\n").unwrap();
        fs::write(dir.path().join("taskboard.json"), r#"{"output": "table"}"#).unwrap();

        let config = ConfigLoader::new(dir.path())
            .load(&CliOverrides::default())
            .unwrap();
        assert_eq!(config.output, OutputFormat::Table);
        assert!(!config.seed);
    }

    #[test]
    #[serial]
    fn test_env_then_cli_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.toml"), "output = \"table\"\n").unwrap();
        std::env::set_var("TASKBOARD_OUTPUT", "json");
        std::env::set_var("TASKBOARD_SEED", "false");

        let loader = ConfigLoader::new(dir.path());
        let from_env = loader.load(&CliOverrides::default());
        let from_cli = loader.load(&CliOverrides {
            seed: Some(true),
            output: None,
        });

        std::env::remove_var("TASKBOARD_OUTPUT");
        std::env::remove_var("TASKBOARD_SEED");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.output, OutputFormat::Json);
        assert!(!from_env.seed);

        let from_cli = from_cli.unwrap();
        assert_eq!(from_cli.output, OutputFormat::Json);
        assert!(from_cli.seed);
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.toml"), "output = [").unwrap();

        let err = ConfigLoader::new(dir.path())
            .load(&CliOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    #[serial]
    fn test_blank_log_level_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.yaml"), "log_level: '  '\n").unwrap();

        let err = ConfigLoader::new(dir.path())
            .load(&CliOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }
}
