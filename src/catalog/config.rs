use crate::error::{CatalogError, Result};
use crate::validation::Limits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "products.json";
pub const MAX_PRODUCT_ID_DIGITS: usize = 15;
pub const MAX_PRODUCT_NAME_LENGTH: usize = 30;
/// Every id of this many digits fits in an `i64`.
pub const MAX_SUPPORTED_ID_DIGITS: usize = 18;

/// Configuration for the catalog, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path of the JSON file holding the catalog
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Maximum number of decimal digits in a product id
    #[serde(default = "default_max_id_digits")]
    pub max_id_digits: usize,

    /// Maximum length of a product name, after trimming
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_max_id_digits() -> usize {
    MAX_PRODUCT_ID_DIGITS
}

fn default_max_name_len() -> usize {
    MAX_PRODUCT_NAME_LENGTH
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_id_digits: MAX_PRODUCT_ID_DIGITS,
            max_name_len: MAX_PRODUCT_NAME_LENGTH,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        config.check()?;
        Ok(config)
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_id_digits: self.max_id_digits,
            max_name_len: self.max_name_len,
        }
    }

    fn check(&self) -> Result<()> {
        if self.max_id_digits == 0 {
            return Err(CatalogError::Config(
                "max_id_digits must be at least 1".to_string(),
            ));
        }
        if self.max_id_digits > MAX_SUPPORTED_ID_DIGITS {
            return Err(CatalogError::Config(format!(
                "max_id_digits cannot exceed {}",
                MAX_SUPPORTED_ID_DIGITS
            )));
        }
        if self.max_name_len == 0 {
            return Err(CatalogError::Config(
                "max_name_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
