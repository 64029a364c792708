use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::error::{Result, ScanError};

/// Optional settings file. Anything given on the command line wins over the
/// values here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub price_list: Option<PathBuf>,
    pub demo_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ScanError::InvalidConfigValueError {
            field: "config".to_string(),
            value: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
