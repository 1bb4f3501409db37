//! Configuration for the address validator

use crate::country::Country;
use crate::error::{Result, ValidatorError};
use crate::reference::ReferenceData;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Raw configuration as written in the JSON file. The country is free text
/// here so names like "South Africa" are accepted as well as codes.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    pub country: Option<String>,

    #[serde(default, alias = "reference_data_path")]
    pub reference_data: Option<PathBuf>,

    #[serde(default)]
    pub pretty: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub country: Country,

    /// Custom reference tables replacing the built-in ones
    pub reference_data: Option<PathBuf>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl ValidatorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidatorError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw_config: RawConfig = serde_json::from_str(json)
            .map_err(|e| ValidatorError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self::from_raw_config(raw_config)?;
        config.validate()?;
        Ok(config)
    }

    fn from_raw_config(raw: RawConfig) -> Result<Self> {
        let country = match raw.country.as_deref() {
            Some(country) => country.parse()?,
            None => Country::default(),
        };

        Ok(Self {
            country,
            reference_data: raw.reference_data,
            pretty: raw.pretty,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.reference_data {
            if path.as_os_str().is_empty() {
                return Err(ValidatorError::Config(
                    "reference_data path must not be empty".to_string(),
                ));
            }
            if !path.is_file() {
                return Err(ValidatorError::Config(format!(
                    "Reference data file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Reference tables for the configured country: the custom file when
    /// one is set, the shared built-in tables otherwise.
    pub fn load_reference_data(&self) -> Result<Arc<ReferenceData>> {
        let path = match &self.reference_data {
            Some(path) => path,
            None => return Ok(ReferenceData::builtin(self.country)),
        };

        log::info!("Loading reference data from {}", path.display());
        let data = ReferenceData::from_file(path)?;
        if data.country != self.country {
            return Err(ValidatorError::Config(format!(
                "Reference data is for {} but the configured country is {}",
                data.country, self.country
            )));
        }
        Ok(Arc::new(data))
    }
}
