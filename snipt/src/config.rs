use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_snippets_dir")]
    pub snippets_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub start_with_tags_expanded: bool,
}

fn default_snippets_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snipt")
        .join("snippets")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snippets_dir: default_snippets_dir(),
            log_level: default_log_level(),
            start_with_tags_expanded: false,
        }
    }
}

impl Settings {
    /// Load settings from `$SNIPT_CONFIG` (or `<config dir>/snipt/config.toml`)
    /// layered under `SNIPT__*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("SNIPT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());

        Self::from_sources(
            File::from(config_path).required(false),
            Environment::with_prefix("SNIPT").separator("__"),
        )
    }

    fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.snippets_dir.as_os_str().is_empty() {
            return Err("snippets_dir is required".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snipt")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(toml: &str) -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml).unwrap();

        Settings::from_sources(
            File::from(path).required(true),
            Environment::with_prefix("SNIPT_TEST_UNUSED").separator("__"),
        )
        .unwrap()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = load("");

        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = load(
            "snippets_dir = \"/tmp/my-snippets\"\nlog_level = \"debug\"\nstart_with_tags_expanded = true\n",
        );

        assert_eq!(settings.snippets_dir, PathBuf::from("/tmp/my-snippets"));
        assert_eq!(settings.log_level, "debug");
        assert!(settings.start_with_tags_expanded);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            snippets_dir: PathBuf::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
