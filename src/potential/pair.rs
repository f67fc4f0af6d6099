//! Concrete pair potentials.

use serde::{Deserialize, Serialize};

use super::traits::Potential;

/// Attractive (or repulsive) Gaussian well `V(r) = V0 * exp(-r^2 / R^2)`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianWell {
    pub v0: f64,
    pub range: f64,
}

impl GaussianWell {
    pub fn new(v0: f64, range: f64) -> Self {
        Self { v0, range }
    }
}

impl Default for GaussianWell {
    fn default() -> Self {
        Self { v0: -4.0, range: 2.0 }
    }
}

impl Potential for GaussianWell {
    fn evaluate(&self, r: f64) -> f64 {
        self.v0 * (-r * r / (self.range * self.range)).exp()
    }
}

/// Non-interacting particles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroPotential;

impl Potential for ZeroPotential {
    fn evaluate(&self, _r: f64) -> f64 {
        0.0
    }
}

/// Position independent shift, every pair contributes `value`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantPotential {
    pub value: f64,
}

impl Potential for ConstantPotential {
    fn evaluate(&self, _r: f64) -> f64 {
        self.value
    }
}

/// Potential selection as it appears in a configuration file.
///
/// ```yaml
/// potential:
///   kind: gaussian
///   v0: -4.0
///   range: 2.0
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PotentialConfig {
    Gaussian(GaussianWell),
    Zero,
    Constant(ConstantPotential),
}

impl Potential for PotentialConfig {
    fn evaluate(&self, r: f64) -> f64 {
        match self {
            PotentialConfig::Gaussian(well) => well.evaluate(r),
            PotentialConfig::Zero => ZeroPotential.evaluate(r),
            PotentialConfig::Constant(c) => c.evaluate(r),
        }
    }
}
