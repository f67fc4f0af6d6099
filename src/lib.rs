//! Few-body DMC - Diffusion Monte Carlo for 1D particles with pair interactions.
//!
//! This crate estimates the ground state energy of a chain of particles on a
//! line by evolving a population of replicas in imaginary time. The replica
//! engine lives in [`sampling`], pair potentials in [`potential`], and the
//! reduction of the reference energy series in [`stats`].

pub mod error;
pub mod potential;
pub mod sampling;
pub mod stats;
pub mod io;

// Re-export commonly used types at crate root
pub use error::DmcError;
pub use potential::{Potential, total_potential, GaussianWell, ZeroPotential, ConstantPotential, PotentialConfig};
pub use sampling::{DmcParams, DmcResults, DmcSimulation, RunParams, StepRecord, run_dmc, Replica, Population, BranchingResult, SurvivalWeight, ReferenceUpdate, CountBaseline, Diffusion, OverflowPolicy};
pub use stats::{WindowStats, trailing_window, autocorrelation_time, blocking_error};
pub use io::{read_config, SimulationConfig};
