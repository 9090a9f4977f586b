use anyhow::{Context, Result, bail};
use hazina_db::LedgerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger: LedgerConfig,
    /// fallback filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => bail!("Unsupported config format. Use .json, .yaml, or .yml"),
    }
}

impl Config {
    /// Get (~/.hazina)
    pub fn hazina_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".hazina"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::hazina_dir()?.join("config.json"))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_file()?,
        };

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else if path.is_some() {
            bail!("Config file not found: {}", config_path.display())
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = match format_of(path)? {
            Format::Json => {
                serde_json::from_str(&content).context("Failed to parse JSON config")?
            }
            Format::Yaml => {
                serde_yaml::from_str(&content).context("Failed to parse YAML config")?
            }
        };

        config
            .ledger
            .validate()
            .with_context(|| format!("Invalid ledger settings in {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = match format_of(path)? {
            Format::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize config")?
            }
            Format::Yaml => serde_yaml::to_string(self).context("Failed to serialize config")?,
        };

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(Config::load_or_default(Some(&path)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.ledger.loan_feature_enabled = false;
        config.log_level = "debug".to_string();
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load_or_default(Some(&path)).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "ledger:\n  max_loans_per_account: 3\n").unwrap();

        let config = Config::load_from_path(&path).expect("Failed to load yaml config");
        assert_eq!(config.ledger.max_loans_per_account, 3);
        assert!(config.ledger.loan_feature_enabled);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_rejects_zero_loan_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ledger": {"max_loans_per_account": 0}}"#).unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
