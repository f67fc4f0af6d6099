use thiserror::Error;

/// Errors raised while configuring or running a DMC simulation.
#[derive(Debug, Error)]
pub enum DmcError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Replica population went extinct at step {step}")]
    EmptyPopulation { step: usize },

    #[error("Population overflow at step {step}: {requested} replicas requested, maximum is {max}")]
    PopulationOverflow {
        step: usize,
        requested: usize,
        max: usize,
    },

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl DmcError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DmcError::InvalidConfiguration(message.into())
    }
}
