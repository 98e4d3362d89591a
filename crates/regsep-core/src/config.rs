use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegsepError, Result};
use crate::regression::SuiteFormat;
use crate::separation::StrategyType;

const CONFIG_FILE: &str = "config.toml";
const BASE_DIR_NAME: &str = ".regsep";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# regsep configuration file
# Location: ~/.regsep/config.toml

[separate]
# Strategy used when --strategy is not given
# "first": each case goes to the first category it fits
# "all":   each case goes to every category it fits
strategy = "first"

# Replace existing partition files when --overwrite is not given
overwrite = false

[output]
# Format of the written partitions: "toml", "json",
# or "" to use the format of the input suite
format = ""
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub separate: SeparateConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Separation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparateConfig {
    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(default)]
    pub overwrite: bool,
}

/// Output defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Empty means "same as the input suite"
    #[serde(default)]
    pub format: String,
}

fn default_strategy() -> String {
    StrategyType::default().as_str().to_string()
}

impl Default for SeparateConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            overwrite: false,
        }
    }
}

impl Config {
    /// Default base directory (`~/.regsep`)
    pub fn default_base_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|h| h.join(BASE_DIR_NAME))
            .ok_or(RegsepError::HomeNotFound)
    }

    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| RegsepError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| RegsepError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Configured strategy
    pub fn strategy(&self) -> Result<StrategyType> {
        self.separate.strategy.parse()
    }

    /// Configured output format, `None` when it should follow the input
    pub fn output_format(&self) -> Result<Option<SuiteFormat>> {
        parse_format(&self.output.format)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "separate.strategy" => Some(self.separate.strategy.clone()),
            "separate.overwrite" => Some(self.separate.overwrite.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || RegsepError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "separate.strategy" => {
                let strategy: StrategyType = value.parse().map_err(|_| invalid())?;
                self.separate.strategy = strategy.as_str().to_string();
                Ok(())
            }
            "separate.overwrite" => {
                self.separate.overwrite = parse_bool(value).ok_or_else(invalid)?;
                Ok(())
            }
            "output.format" => {
                let format = parse_format(value).map_err(|_| invalid())?;
                self.output.format = format
                    .map(|f| f.extension().to_string())
                    .unwrap_or_default();
                Ok(())
            }
            _ => Err(RegsepError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["separate.strategy", "separate.overwrite", "output.format"]
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_format(value: &str) -> Result<Option<SuiteFormat>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    SuiteFormat::from_name(trimmed)
        .map(Some)
        .ok_or_else(|| RegsepError::InvalidConfigValue {
            key: "output.format".to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.strategy().unwrap(), StrategyType::First);
        assert!(!config.separate.overwrite);
        assert_eq!(config.output_format().unwrap(), None);
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("separate.strategy", "ALL").unwrap();
        assert_eq!(config.get("separate.strategy").unwrap(), "all");
        assert_eq!(config.strategy().unwrap(), StrategyType::All);

        config.set("separate.overwrite", "true").unwrap();
        assert!(config.separate.overwrite);

        config.set("output.format", "json").unwrap();
        assert_eq!(config.output_format().unwrap(), Some(SuiteFormat::Json));

        config.set("output.format", "").unwrap();
        assert_eq!(config.output_format().unwrap(), None);
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("separate.strategy", "most").unwrap_err(),
            RegsepError::InvalidConfigValue { .. }
        ));
        assert!(matches!(
            config.set("output.format", "yaml").unwrap_err(),
            RegsepError::InvalidConfigValue { .. }
        ));
        assert!(matches!(
            config.set("nope", "1").unwrap_err(),
            RegsepError::ConfigKeyNotFound { .. }
        ));
    }

    #[test]
    fn test_list_covers_all_keys() {
        let keys: Vec<_> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["separate.strategy", "separate.overwrite", "output.format"]
        );
    }

    #[test]
    fn test_init_then_load_template() {
        let tmp = TempDir::new().unwrap();
        let path = Config::init(tmp.path()).unwrap();
        assert!(path.exists());
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.strategy().unwrap(), StrategyType::First);
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("separate.strategy", "all").unwrap();
        config.save(tmp.path()).unwrap();

        let loaded = Config::load(tmp.path()).unwrap();
        assert_eq!(loaded.strategy().unwrap(), StrategyType::All);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.separate.strategy, "first");
    }

    #[test]
    fn test_load_invalid_reports_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "separate = 3").unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, RegsepError::ConfigParse { .. }));
    }
}
