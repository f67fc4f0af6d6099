// Read the simulation setup from a yaml file:
/*
    potential:
      kind: gaussian
      v0: -4.0
      range: 2.0
    dmc:
      n_particles: 3
      target_replicas: 500
      dt: 0.1
    run:
      n_steps: 1000
      window_fraction: 0.5
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DmcError;
use crate::potential::PotentialConfig;
use crate::sampling::{DmcParams, RunParams};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub potential: Option<PotentialConfig>,
    pub dmc: DmcParams,
    pub run: RunParams,
}

impl SimulationConfig {
    pub fn from_yaml(text: &str) -> Result<Self, DmcError> {
        let config: SimulationConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured potential; a config without one cannot be run.
    pub fn potential(&self) -> Result<PotentialConfig, DmcError> {
        self.potential
            .ok_or_else(|| DmcError::invalid("potential function V(x) must be provided"))
    }

    pub fn validate(&self) -> Result<(), DmcError> {
        self.potential()?;
        self.dmc.validate()
    }
}

/// Read and validate a yaml configuration file.
pub fn read_config<P: AsRef<Path>>(filename: P) -> Result<SimulationConfig, DmcError> {
    let text = std::fs::read_to_string(filename)?;
    SimulationConfig::from_yaml(&text)
}
