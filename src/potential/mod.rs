//! Potential module - pair potentials and the few-body potential energy sum.

mod traits;
mod pair;

pub use traits::{Potential, total_potential};
pub use pair::{GaussianWell, ZeroPotential, ConstantPotential, PotentialConfig};
