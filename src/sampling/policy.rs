//! Pluggable pieces of the DMC step: survival weight, reference energy update,
//! diffusion of the relative coordinates and the population ceiling policy.

use nalgebra::DVector;
use rand::Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of descendants of a single replica per step.
pub const MAX_MULTIPLICITY: usize = 3;

/// Stochastic rounding of a survival weight: `m = min(floor(W + u), 3)`.
///
/// Negative and NaN weights give no descendants.
pub fn multiplicity(weight: f64, u: f64) -> usize {
    let m = (weight + u).floor();
    if m.is_nan() || m <= 0.0 {
        0
    } else {
        (m as usize).min(MAX_MULTIPLICITY)
    }
}

/// Survival weight `W` of a replica with potential energy `V`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivalWeight {
    /// W = exp(-Δτ/ħ (V - E_ref))
    #[default]
    Exponential,
    /// W = 1 - (V - E_ref) Δτ/ħ, first order expansion of the exponential
    Linear,
}

impl SurvivalWeight {
    pub fn weight(&self, v: f64, e_ref: f64, dt: f64, hbar: f64) -> f64 {
        let x = (v - e_ref) * dt / hbar;
        match self {
            SurvivalWeight::Exponential => (-x).exp(),
            SurvivalWeight::Linear => 1.0 - x,
        }
    }
}

/// Which population count the feedback term compares the current count against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountBaseline {
    /// Count before the most recent branching step
    Previous,
    /// Count fixed at initialization
    #[default]
    Target,
}

impl CountBaseline {
    pub fn count(&self, n_prev: usize, n_target: usize) -> usize {
        match self {
            CountBaseline::Previous => n_prev,
            CountBaseline::Target => n_target,
        }
    }
}

/// Reference energy update applied once `E_ref` has been seeded.
///
/// The feedback term `α (1 - N/N_base)` is negative when the population has
/// grown past its baseline, which lowers `E_ref` and suppresses births.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceUpdate {
    /// E_ref = <V> + α (1 - N/N_base)
    MeanPotential { baseline: CountBaseline },
    /// E_ref += α (1 - N/N_base)
    Accumulate { baseline: CountBaseline },
}

impl Default for ReferenceUpdate {
    fn default() -> Self {
        ReferenceUpdate::MeanPotential {
            baseline: CountBaseline::Target,
        }
    }
}

impl ReferenceUpdate {
    pub fn baseline(&self) -> CountBaseline {
        match self {
            ReferenceUpdate::MeanPotential { baseline } | ReferenceUpdate::Accumulate { baseline } => {
                *baseline
            }
        }
    }

    pub fn feedback(&self, alpha: f64, n: usize, n_prev: usize, n_target: usize) -> f64 {
        let base = self.baseline().count(n_prev, n_target);
        alpha * (1.0 - n as f64 / base as f64)
    }
}

/// How one diffusion step displaces the relative coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diffusion {
    /// Every relative offset takes an independent Gaussian step.
    #[default]
    Independent,
    /// Every particle, the reference particle included, takes an independent
    /// Gaussian step; offsets move by the difference to the reference step.
    ParticleFrame,
}

impl Diffusion {
    pub fn sample<R: Rng + ?Sized>(&self, dim: usize, normal: &Normal<f64>, rng: &mut R) -> DVector<f64> {
        match self {
            Diffusion::Independent => DVector::from_distribution(dim, normal, rng),
            Diffusion::ParticleFrame => {
                let steps = DVector::from_distribution(dim + 1, normal, rng);
                let reference = steps[dim];
                steps.rows(0, dim).map(|x| x - reference)
            }
        }
    }

    /// Spread the sampled offset displacements have relative to `sigma`.
    pub fn offset_spread(&self, sigma: f64) -> f64 {
        match self {
            Diffusion::Independent => sigma,
            Diffusion::ParticleFrame => sigma * 2.0f64.sqrt(),
        }
    }
}

/// What to do when cloning would push the population past `max_replicas`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Grant clones in population order until the ceiling, drop the rest.
    #[default]
    Cap,
    /// Abort the step with `DmcError::PopulationOverflow`.
    Fail,
}
