use std::path::Path;

use serde::{Deserialize, Serialize};

use ps_core::{HostSettings, SimulationParams};

use crate::error::{SimError, SimResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for the noise source.
    pub seed: u64,
    /// Engine parameters.
    pub params: SimulationParams,
    /// Host pacing and display preferences.
    pub host: HostSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            params: SimulationParams::default(),
            host: HostSettings::default(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the engine parameters.
    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the host settings.
    pub fn with_host(mut self, host: HostSettings) -> Self {
        self.host = host;
        self
    }

    /// Enable or disable consumption noise.
    pub fn with_noise(mut self, enabled: bool) -> Self {
        self.params.noise_enabled = enabled;
        self
    }

    /// Validate both the engine parameters and the host settings.
    pub fn validate(&self) -> SimResult<()> {
        self.params.validate()?;
        self.host.validate()?;
        Ok(())
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), seed = config.seed, "loaded configuration");
        Ok(config)
    }

    /// Render as a TOML document accepted by [`SimConfig::from_toml_str`].
    pub fn to_toml_string(&self) -> SimResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
