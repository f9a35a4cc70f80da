//! Loading and saving [`SimConfig`] as RON.

use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;

use crate::error::{Error, Result};
use crate::params::SimConfig;

/// Read a config file, fill unspecified fields with defaults and validate it
pub fn load(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config: SimConfig = ron::de::from_str(&text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Render a config as pretty RON
pub fn to_ron(config: &SimConfig) -> Result<String> {
    let pretty_config = PrettyConfig::new().depth_limit(3).indentor("    ".to_string());
    Ok(ron::ser::to_string_pretty(config, pretty_config)?)
}

/// Write a config file
pub fn save(config: &SimConfig, path: &Path) -> Result<()> {
    let serialized = to_ron(config)?;
    fs::write(path, serialized).map_err(|e| Error::io(path, e))?;
    Ok(())
}
