//! Application configuration
//!
//! Configuration loaded from `.tally.toml` (see [`crate::config_search_paths`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial counts, one counter each. Empty means a single counter at zero.
    #[serde(default)]
    pub initial_counts: Vec<i64>,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file path; logs go to stderr when unset
    #[serde(default)]
    pub log_file: Option<String>,

    /// Print full counter ids when listing counters
    #[serde(default = "default_show_ids")]
    pub show_ids: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_ids() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_counts: Vec::new(),
            log_level: default_log_level(),
            log_file: None,
            show_ids: default_show_ids(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then config directory
    ///
    /// Returns `Ok(None)` when no config file exists and an error when the
    /// file found cannot be parsed, so the caller decides how to report it.
    pub fn try_load() -> Result<Option<Self>> {
        Self::try_load_from(&crate::config_search_paths())
    }

    /// Like [`AppConfig::try_load`], searching only `search`
    pub fn try_load_from<P: AsRef<Path>>(search: &[P]) -> Result<Option<Self>> {
        match crate::load_config_file_from(search) {
            Some(content) => {
                let config = Self::from_toml_str(&content)?;
                log::info!("Loaded app config from file");
                Ok(Some(config))
            }
            None => {
                log::debug!("No config file found");
                Ok(None)
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid tally config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::test_support::scratch_dir;
    use crate::config_file::LOCAL_CONFIG_FILE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.initial_counts.is_empty());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
        assert!(config.show_ids);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            initial_counts = [0, 10, -3]
            log_level = "debug"
            log_file = "tally.log"
            show_ids = false
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config,
            AppConfig {
                initial_counts: vec![0, 10, -3],
                log_level: "debug".to_string(),
                log_file: Some("tally.log".to_string()),
                show_ids: false,
            }
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            initial_counts = [1]
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.initial_counts, vec![1]);
        // Other fields should use defaults
        assert_eq!(config.log_level, "info");
        assert!(config.show_ids);
    }

    #[test]
    fn test_config_rejects_bad_types() {
        let toml = r#"
            initial_counts = "many"
        "#;
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_try_load_reads_file() {
        let dir = scratch_dir("load");
        let path = dir.join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "initial_counts = [2, 4]\nshow_ids = false\n").unwrap();

        let config = AppConfig::try_load_from(&[path]).unwrap().unwrap();
        assert_eq!(config.initial_counts, vec![2, 4]);
        assert!(!config.show_ids);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_try_load_without_file() {
        let dir = scratch_dir("absent");
        let loaded = AppConfig::try_load_from(&[dir.join(LOCAL_CONFIG_FILE)]).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_try_load_reports_parse_errors() {
        let dir = scratch_dir("broken");
        let path = dir.join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "initial_counts = \"many\"\n").unwrap();

        let err = AppConfig::try_load_from(&[path]).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Invalid tally config"));
    }
}
