//! Main DishaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::integrator::{HeadingIntegrator, IntegratorConfig};

use super::error::ConfigLoadError;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/disha.yaml";

/// Full Disha configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DishaConfig {
    /// Heading integrator settings
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

impl DishaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/disha.yaml), falling back to defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check all sections for out-of-range values
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.integrator.validate()
    }

    /// Build a heading integrator from the integrator section
    pub fn build_integrator(&self) -> Result<HeadingIntegrator, ConfigLoadError> {
        HeadingIntegrator::from_config(self.integrator.clone())
    }
}
