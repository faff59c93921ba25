//! Generator configuration.
//!
//! Values resolve in layers: built-in defaults, then an optional JSON file,
//! then `ICONSTUB_*` environment variables, then command-line flags.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];
pub const DEFAULT_OUTPUT_DIR: &str = "assets/img";

pub const ENV_OUTPUT_DIR: &str = "ICONSTUB_OUTPUT_DIR";
pub const ENV_SIZES: &str = "ICONSTUB_SIZES";

const APP_DIR: &str = "iconstub";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the icons are written into; created if missing.
    pub output_dir: PathBuf,
    /// Nominal icon sizes, one output file per entry, in this order.
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>, sizes: Vec<u32>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sizes,
        }
    }

    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read(path)?;
        let config: Self = serde_json::from_slice(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Layers `file` (defaults when `None`), then `lookup`, then `flags`, and validates.
    pub fn resolve<F>(file: Option<&Path>, lookup: F, flags: &FlagOverrides) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides_from(lookup)?;
        flags.apply(&mut config);
        config.validate()?;
        debug!("Resolved config: {config:?}");
        Ok(config)
    }

    /// Applies `ICONSTUB_*` values found through `lookup`, e.g. `std::env::var`.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            debug!("{ENV_OUTPUT_DIR} overrides output dir: {dir}");
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ENV_SIZES) {
            self.sizes = parse_sizes(&raw)
                .map_err(|e| ConfigError::Env(format!("{ENV_SIZES}={raw:?}: {e}")))?;
            debug!("{ENV_SIZES} overrides sizes: {:?}", self.sizes);
        }

        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output directory cannot be empty".to_string(),
            ));
        }

        if self.sizes.is_empty() {
            return Err(ConfigError::Validation(
                "at least one icon size is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(ConfigError::Validation(
                    "icon sizes must be greater than 0".to_string(),
                ));
            }
            if !seen.insert(size) {
                return Err(ConfigError::Validation(format!(
                    "icon size {size} is listed more than once"
                )));
            }
        }

        Ok(())
    }
}

/// Values given on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub output_dir: Option<PathBuf>,
    pub sizes: Option<Vec<u32>>,
}

impl FlagOverrides {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(sizes) = &self.sizes {
            config.sizes = sizes.clone();
        }
    }
}

/// The per-user config file, only if it exists.
pub fn user_config_file() -> Option<PathBuf> {
    default_config_path().filter(|path| path.is_file())
}

/// `<config dir>/iconstub/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Parses a comma-separated size list such as `"72, 96,128"`.
pub fn parse_sizes(raw: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<u32>)
        .collect()
}
