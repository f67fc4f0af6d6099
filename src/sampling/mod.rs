//! Sampling module - Diffusion Monte Carlo over a population of replicas.

mod traits;
mod replica;
mod population;
mod policy;
mod dmc;

pub use traits::BranchingResult;
pub use replica::Replica;
pub use population::Population;
pub use policy::{
    multiplicity, CountBaseline, Diffusion, OverflowPolicy, ReferenceUpdate, SurvivalWeight,
    MAX_MULTIPLICITY,
};
pub use dmc::{run_dmc, DmcParams, DmcResults, DmcSimulation, RunParams, StepRecord};
