use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ObjectError, ObjectResult};

/// Settings for producing STIX content.
///
/// ```toml
/// spec_version = "2.0"
/// pretty = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StixConfig {
    /// Spec version stamped on objects built from this configuration.
    pub spec_version: String,
    /// Indent encoded JSON instead of emitting it compactly.
    pub pretty: bool,
}

impl Default for StixConfig {
    fn default() -> Self {
        Self {
            spec_version: "2.0".into(),
            pretty: false,
        }
    }
}

impl StixConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ObjectResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ObjectResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), spec_version = %config.spec_version, "loaded STIX configuration");
        Ok(config)
    }

    /// Reject settings that cannot produce valid objects.
    pub fn validate(&self) -> ObjectResult<()> {
        if self.spec_version.trim().is_empty() {
            return Err(ObjectError::Configuration(
                "spec_version must not be empty".into(),
            ));
        }
        Ok(())
    }
}
