//! Engine settings, read from TOML.
//!
//! ```toml
//! [chart]
//! strict_validation = true
//! rulership = "modern"
//!
//! [aspects.orbs]
//! conjunction = 8.0
//! quincunx = 2.5
//! ```

use crate::aspects::AspectSettings;
use crate::error::ConfigError;
use crate::zodiac::RulershipScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Relative locations searched by [`load_settings`].
pub const SETTINGS_PATHS: &[&str] = &["configs/oracle.toml", "../../configs/oracle.toml"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Reject non-finite or out-of-range coordinates instead of letting
    /// them propagate as NaN through the chart.
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
    /// Table used to find the ascendant's ruling planet.
    #[serde(default)]
    pub rulership: RulershipScheme,
}

fn default_strict_validation() -> bool {
    true
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            strict_validation: default_strict_validation(),
            rulership: RulershipScheme::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub aspects: AspectSettings,
}

impl EngineSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: EngineSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every section; currently only the orb overrides can be wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aspects.validate()
    }
}

/// Load settings from the first existing file in [`SETTINGS_PATHS`], or the
/// defaults when there is none.
pub fn load_settings() -> anyhow::Result<EngineSettings> {
    for p in SETTINGS_PATHS {
        if Path::new(p).exists() {
            let settings = EngineSettings::from_path(p)
                .map_err(|e| anyhow::anyhow!("Failed to load oracle settings from {}: {e}", p))?;
            log::debug!("loaded oracle settings from {}", p);
            return Ok(settings);
        }
    }
    log::debug!("no oracle settings in {:?}; using defaults", SETTINGS_PATHS);
    Ok(EngineSettings::default())
}
