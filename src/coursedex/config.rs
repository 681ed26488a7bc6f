use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "courses.json";

/// Configuration for coursedex, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog document to read when `--data` is not given
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Level selector options offered in `browse` and `levels`
    #[serde(default = "default_level_buckets")]
    pub level_buckets: Vec<i64>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_level_buckets() -> Vec<i64> {
    vec![100, 200, 300, 400, 500, 600]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            level_buckets: default_level_buckets(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatalogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Parses a comma separated list such as `100,200,300`.
    ///
    /// Buckets are stored sorted and without duplicates.
    pub fn set_level_buckets_from_str(&mut self, value: &str) -> Result<()> {
        let mut buckets = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| CatalogError::Config(format!("Invalid level bucket: {}", s)))
            })
            .collect::<Result<Vec<_>>>()?;

        if buckets.is_empty() {
            return Err(CatalogError::Config(
                "At least one level bucket is required".to_string(),
            ));
        }

        buckets.sort_unstable();
        buckets.dedup();
        self.level_buckets = buckets;
        Ok(())
    }

    pub fn level_buckets_display(&self) -> String {
        self.level_buckets
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, PathBuf::from("courses.json"));
        assert_eq!(config.level_buckets, vec![100, 200, 300, 400, 500, 600]);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = CatalogConfig::default();
        config.data_file = PathBuf::from("/srv/catalog/rit.json");
        config.set_level_buckets_from_str("200,100").unwrap();
        config.save(&nested).unwrap();

        let loaded = CatalogConfig::load(&nested).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("/srv/catalog/rit.json"));
        assert_eq!(loaded.level_buckets, vec![100, 200]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"data_file": "x.json"}"#).unwrap();

        let config = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, PathBuf::from("x.json"));
        assert_eq!(config.level_buckets, default_level_buckets());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            CatalogConfig::load(dir.path()),
            Err(CatalogError::Serialization(_))
        ));
    }

    #[test]
    fn test_level_buckets_parsing() {
        let mut config = CatalogConfig::default();
        config.set_level_buckets_from_str(" 300, 100 ,300,").unwrap();
        assert_eq!(config.level_buckets, vec![100, 300]);
        assert_eq!(config.level_buckets_display(), "100,300");

        assert!(config.set_level_buckets_from_str("100,abc").is_err());
        assert!(config.set_level_buckets_from_str(" , ").is_err());
        assert_eq!(config.level_buckets, vec![100, 300]);
    }
}
