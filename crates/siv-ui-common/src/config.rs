//! Configuration for the dashboard front ends.
//!
//! Stored in `~/.siv/config.toml`; partial configs are fine, unspecified
//! values fall back to the indicator catalog defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use siv_data::Indicator;

use crate::error::{Error, Result};

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SivConfig {
    /// Dataset location and catalog.
    pub data: DataConfig,
}

/// Where the datasets live and which ones to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `<name>.csv` per dataset.
    pub data_dir: Option<PathBuf>,

    /// Datasets to load at startup.
    pub datasets: Vec<String>,

    /// Reference dataset the country-code mapping is derived from.
    pub reference_dataset: String,

    /// Name column of the reference dataset.
    pub reference_name_column: String,

    /// Code column of the reference dataset.
    pub reference_code_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            data_dir: None,
            datasets: Indicator::ALL.iter().map(|i| i.key().to_string()).collect(),
            reference_dataset: "codigos_paises".to_string(),
            reference_name_column: siv_core::schema::COUNTRY.to_string(),
            reference_code_column: "Código".to_string(),
        }
    }
}

impl SivConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".siv"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_lists_the_catalog() {
        let config = SivConfig::default();
        assert_eq!(config.data.datasets.len(), Indicator::ALL.len());
        assert!(config.data.datasets.contains(&"gini".to_string()));
        assert_eq!(config.data.reference_dataset, "codigos_paises");
    }

    #[test]
    fn test_partial_config_parsing() {
        let toml = r#"
            [data]
            data_dir = "/srv/indicadores"
        "#;

        let config: SivConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.data.data_dir,
            Some(PathBuf::from("/srv/indicadores"))
        );
        // Defaults for unset values.
        assert_eq!(config.data.datasets.len(), Indicator::ALL.len());
        assert_eq!(config.data.reference_name_column, "País");
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut config = SivConfig::default();
        config.data.datasets = vec!["gini".to_string()];
        config.save_to(&path).unwrap();

        let loaded = SivConfig::load_from(&path).unwrap();
        assert_eq!(loaded.data.datasets, vec!["gini".to_string()]);
    }
}
