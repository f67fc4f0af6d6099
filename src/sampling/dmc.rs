//! Diffusion Monte Carlo for a 1D chain of particles with pairwise interactions.
//!
//! Each step diffuses the replicas, updates the reference energy from the
//! post-diffusion population, lets every replica branch or die according to
//! its potential energy relative to `E_ref`, and compacts the population.
//! The long-run average of `E_ref` estimates the ground state energy.

// reference: https://www.thphys.uni-heidelberg.de/~wetzel/qmc2006/KOSZ96.pdf

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::policy::{multiplicity, Diffusion, OverflowPolicy, ReferenceUpdate, SurvivalWeight};
use super::population::Population;
use super::traits::BranchingResult;
use crate::error::DmcError;
use crate::potential::Potential;
use crate::stats::{autocorrelation_time, blocking_error, trailing_window};

/// Engine configuration. Units are chosen so that ħ = m = 1 by default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmcParams {
    pub n_particles: usize,
    /// Population set point, also the initial number of replicas
    pub target_replicas: usize,
    pub max_replicas: Option<usize>,
    pub dt: f64, // \Delta \tau
    pub mass: f64,
    pub hbar: f64,
    /// α in the population feedback term
    pub control_strength: f64,
    pub seed: u64,
    pub weight: SurvivalWeight,
    pub reference: ReferenceUpdate,
    pub diffusion: Diffusion,
    pub overflow: OverflowPolicy,
    pub kinetic_correction: bool,
}

impl Default for DmcParams {
    fn default() -> Self {
        Self {
            n_particles: 2,
            target_replicas: 500,
            max_replicas: Some(2000),
            dt: 0.1,
            mass: 1.0,
            hbar: 1.0,
            control_strength: 0.2,
            seed: 42,
            weight: SurvivalWeight::default(),
            reference: ReferenceUpdate::default(),
            diffusion: Diffusion::default(),
            overflow: OverflowPolicy::default(),
            kinetic_correction: false,
        }
    }
}

impl DmcParams {
    pub fn validate(&self) -> Result<(), DmcError> {
        if self.n_particles < 2 {
            return Err(DmcError::invalid(format!(
                "n_particles must be at least 2, got {}",
                self.n_particles
            )));
        }
        if self.target_replicas == 0 {
            return Err(DmcError::invalid("target_replicas must be positive"));
        }
        if let Some(max) = self.max_replicas {
            if max < self.target_replicas {
                return Err(DmcError::invalid(format!(
                    "max_replicas ({}) is below target_replicas ({})",
                    max, self.target_replicas
                )));
            }
        }
        for (name, value) in [("dt", self.dt), ("mass", self.mass), ("hbar", self.hbar)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DmcError::invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !self.control_strength.is_finite() || self.control_strength < 0.0 {
            return Err(DmcError::invalid(format!(
                "control_strength must be non-negative, got {}",
                self.control_strength
            )));
        }
        Ok(())
    }

    /// Number of relative coordinates per replica.
    pub fn dim(&self) -> usize {
        self.n_particles - 1
    }

    /// Width of a single Gaussian diffusion step, sqrt(ħΔτ/m).
    pub fn diffusion_sigma(&self) -> f64 {
        (self.hbar * self.dt / self.mass).sqrt()
    }
}

/// Observables after one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    pub e_ref: f64,
    pub n: usize,
    pub n_prev: usize,
}

/// The replica population together with the reference energy that controls it.
pub struct DmcSimulation<V: Potential> {
    potential: V,
    params: DmcParams,
    rng: StdRng,
    normal: Normal<f64>,
    population: Population,
    e_ref: Option<f64>,
    n: usize,
    n_prev: usize,
    steps: usize,
}

impl<V: Potential> DmcSimulation<V> {
    /// Validate `params`, place `target_replicas` replicas at the origin and
    /// seed `E_ref` with their mean potential energy.
    pub fn new(potential: V, params: DmcParams) -> Result<Self, DmcError> {
        params.validate()?;
        let normal = Normal::new(0.0, params.diffusion_sigma())
            .map_err(|e| DmcError::invalid(format!("diffusion step width: {}", e)))?;

        let mut sim = Self {
            potential,
            params,
            rng: StdRng::seed_from_u64(params.seed),
            normal,
            population: Population::with_size(params.target_replicas, params.dim()),
            e_ref: None,
            n: params.target_replicas,
            n_prev: params.target_replicas,
            steps: 0,
        };
        let e_ref = sim.update_reference_energy()?;

        info!(
            n_particles = params.n_particles,
            target_replicas = params.target_replicas,
            dt = params.dt,
            seed = params.seed,
            e_ref,
            "initialized DMC population"
        );
        Ok(sim)
    }

    pub fn params(&self) -> &DmcParams {
        &self.params
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// `None` only before the first estimate, which `new` already computes.
    pub fn reference_energy(&self) -> Option<f64> {
        self.e_ref
    }

    /// Population size after the most recent cull.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Population size before the most recent branching step.
    pub fn n_prev(&self) -> usize {
        self.n_prev
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Human readable listing of every replica, for debugging.
    pub fn dump_replicas(&self) -> String {
        self.population.to_string()
    }

    /// Diffuse every live replica by one Gaussian step.
    pub fn walk(&mut self) {
        let dim = self.params.dim();
        for replica in self.population.replicas_mut().iter_mut().filter(|r| r.is_alive()) {
            let dx = self.params.diffusion.sample(dim, &self.normal, &mut self.rng);
            replica.displace(dx);
        }
    }

    /// Mean total potential energy over live replicas.
    pub fn mean_potential(&self) -> Result<f64, DmcError> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for replica in self.population.alive() {
            sum += replica.potential_energy(&self.potential)?;
            count += 1;
        }
        if count == 0 {
            return Err(DmcError::EmptyPopulation { step: self.steps });
        }
        Ok(sum / count as f64)
    }

    /// KE = Σ_c ½ m (<dx_c>/Δτ)², from the mean of the last displacements.
    pub fn mean_kinetic_energy(&self) -> f64 {
        self.population
            .mean_displacement()
            .map(|mean| 0.5 * self.params.mass * (mean / self.params.dt).norm_squared())
            .unwrap_or(0.0)
    }

    fn kinetic_correction(&self) -> f64 {
        if self.params.kinetic_correction {
            self.mean_kinetic_energy()
        } else {
            0.0
        }
    }

    /// Seed `E_ref` with the mean potential on the first call; afterwards
    /// apply the configured [`ReferenceUpdate`].
    pub fn update_reference_energy(&mut self) -> Result<f64, DmcError> {
        if self.population.alive_count() == 0 {
            return Err(DmcError::EmptyPopulation { step: self.steps });
        }

        let e_ref = match self.e_ref {
            None => self.mean_potential()? + self.kinetic_correction(),
            Some(current) => {
                let feedback = self.params.reference.feedback(
                    self.params.control_strength,
                    self.n,
                    self.n_prev,
                    self.params.target_replicas,
                );
                match self.params.reference {
                    ReferenceUpdate::MeanPotential { .. } => {
                        self.mean_potential()? + self.kinetic_correction() + feedback
                    }
                    ReferenceUpdate::Accumulate { .. } => current + feedback,
                }
            }
        };

        self.e_ref = Some(e_ref);
        Ok(e_ref)
    }

    /// Birth/death decision for every replica present when the call starts.
    ///
    /// Clones are appended after all decisions are made, so they are never
    /// considered for branching in the same step. Killed replicas stay in the
    /// arena until [`DmcSimulation::cull`]. Returns the number of clones made.
    pub fn branch(&mut self) -> Result<usize, DmcError> {
        let e_ref = match self.e_ref {
            Some(e) => e,
            None => self.update_reference_energy()?,
        };
        let (dt, hbar) = (self.params.dt, self.params.hbar);

        let mut decisions = Vec::with_capacity(self.population.len());
        for (idx, replica) in self.population.iter().enumerate() {
            if !replica.is_alive() {
                continue;
            }
            let v = replica.potential_energy(&self.potential)?;
            let w = self.params.weight.weight(v, e_ref, dt, hbar);
            let u: f64 = self.rng.gen();
            decisions.push((idx, BranchingResult::from_multiplicity(multiplicity(w, u))));
        }

        let survivors = decisions
            .iter()
            .filter(|(_, d)| *d != BranchingResult::Kill)
            .count();
        let requested: usize = decisions.iter().map(|(_, d)| d.descendants()).sum();

        let mut clone_budget = usize::MAX;
        if let Some(max) = self.params.max_replicas {
            if requested > max {
                match self.params.overflow {
                    OverflowPolicy::Fail => {
                        return Err(DmcError::PopulationOverflow {
                            step: self.steps,
                            requested,
                            max,
                        });
                    }
                    OverflowPolicy::Cap => {
                        clone_budget = max.saturating_sub(survivors);
                        warn!(
                            step = self.steps,
                            requested, max, "population ceiling reached, dropping clones"
                        );
                    }
                }
            }
        }

        let mut clones = Vec::new();
        let replicas = self.population.replicas_mut();
        for (idx, decision) in decisions {
            match decision {
                BranchingResult::Kill => replicas[idx].kill(),
                BranchingResult::Keep => {}
                BranchingResult::Clone { n } => {
                    for _ in 0..n {
                        if clones.len() >= clone_budget {
                            break;
                        }
                        clones.push(replicas[idx].spawn());
                    }
                }
            }
        }

        let created = clones.len();
        for clone in clones {
            self.population.push(clone);
        }
        Ok(created)
    }

    /// Remove the replicas killed during branching. Returns how many died.
    pub fn cull(&mut self) -> usize {
        self.population.cull()
    }

    /// `N_prev := N`, `N := len(population)`.
    pub fn count(&mut self) {
        self.n_prev = self.n;
        self.n = self.population.len();
    }

    /// One time step: walk, reference energy, branch, cull, count.
    pub fn step(&mut self) -> Result<StepRecord, DmcError> {
        if self.population.alive_count() == 0 {
            return Err(DmcError::EmptyPopulation { step: self.steps });
        }

        self.walk();
        let e_ref = self.update_reference_energy()?;
        let born = self.branch()?;
        let died = self.cull();
        self.count();
        self.steps += 1;

        debug!(step = self.steps, e_ref, n = self.n, born, died, "dmc step");

        Ok(StepRecord {
            step: self.steps,
            e_ref,
            n: self.n,
            n_prev: self.n_prev,
        })
    }
}

/// Length of a run and how its `E_ref` series is reduced to an estimate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    pub n_steps: usize,
    /// Trailing fraction of the series averaged into the energy estimate
    pub window_fraction: f64,
    /// Log progress every this many steps, 0 disables
    pub log_interval: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            n_steps: 1000,
            window_fraction: 0.5,
            log_interval: 100,
        }
    }
}

/// Results of a DMC run.
#[derive(Clone, Debug)]
pub struct DmcResults {
    /// Trailing-window mean of `E_ref`, the ground state energy estimate
    pub energy: f64,
    pub std_dev: f64,
    /// Standard error of the mean from blocking, accounts for autocorrelation
    pub error: f64,
    pub autocorrelation_time: f64,
    pub window_samples: usize,
    pub final_population: usize,
    pub history: Vec<StepRecord>,
}

/// Run `run.n_steps` DMC steps and reduce the `E_ref` series.
pub fn run_dmc<V: Potential>(
    potential: V,
    params: DmcParams,
    run: &RunParams,
) -> Result<DmcResults, DmcError> {
    if run.n_steps == 0 {
        return Err(DmcError::invalid("n_steps must be positive"));
    }

    let mut sim = DmcSimulation::new(potential, params)?;
    let mut history = Vec::with_capacity(run.n_steps);

    for _ in 0..run.n_steps {
        let record = sim.step()?;
        if run.log_interval > 0 && record.step % run.log_interval == 0 {
            info!(
                step = record.step,
                e_ref = record.e_ref,
                n = record.n,
                "dmc progress"
            );
        }
        history.push(record);
    }

    let series: Vec<f64> = history.iter().map(|r| r.e_ref).collect();
    let window = trailing_window(&series, run.window_fraction)?;
    let tail = &series[series.len() - window.samples..];
    let tau = autocorrelation_time(tail);
    let error = blocking_error(tail, tau);

    Ok(DmcResults {
        energy: window.mean,
        std_dev: window.std_dev,
        error,
        autocorrelation_time: tau,
        window_samples: window.samples,
        final_population: sim.n(),
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::{ConstantPotential, GaussianWell, ZeroPotential};
    use crate::sampling::CountBaseline;
    use approx::assert_relative_eq;

    fn small_params() -> DmcParams {
        DmcParams {
            target_replicas: 100,
            max_replicas: Some(400),
            ..DmcParams::default()
        }
    }

    /// Zero at the origin, `depth` anywhere else. Diffusion moves every replica
    /// off the origin, so the first step sees `depth` everywhere while `E_ref`
    /// was seeded at zero.
    fn step_potential(depth: f64) -> impl Fn(f64) -> f64 {
        move |r: f64| if r == 0.0 { 0.0 } else { depth }
    }

    #[test]
    fn test_rejects_single_particle() {
        let params = DmcParams {
            n_particles: 1,
            ..DmcParams::default()
        };
        let err = DmcSimulation::new(ZeroPotential, params).err().unwrap();
        assert!(matches!(err, DmcError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_bad_time_step() {
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let params = DmcParams {
                dt,
                ..DmcParams::default()
            };
            assert!(matches!(
                DmcSimulation::new(ZeroPotential, params),
                Err(DmcError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_rejects_ceiling_below_target() {
        let params = DmcParams {
            target_replicas: 500,
            max_replicas: Some(100),
            ..DmcParams::default()
        };
        assert!(DmcSimulation::new(ZeroPotential, params).is_err());
    }

    #[test]
    fn test_diffusion_sigma_scaling() {
        assert_relative_eq!(DmcParams::default().diffusion_sigma(), 0.1f64.sqrt());
        let heavy = DmcParams {
            mass: 4.0,
            ..DmcParams::default()
        };
        assert_relative_eq!(heavy.diffusion_sigma(), 0.1f64.sqrt() / 2.0, epsilon = 1e-12);
        let scaled = DmcParams {
            hbar: 2.0,
            dt: 0.05,
            ..DmcParams::default()
        };
        assert_relative_eq!(scaled.diffusion_sigma(), 0.1f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_walk_spread_follows_mass() {
        let params = DmcParams {
            mass: 4.0,
            target_replicas: 2000,
            ..DmcParams::default()
        };
        let mut sim = DmcSimulation::new(ZeroPotential, params).unwrap();
        sim.walk();
        let steps: Vec<f64> = sim.population().iter().map(|r| r.last_displacement()[0]).collect();
        let n = steps.len() as f64;
        let mean = steps.iter().sum::<f64>() / n;
        let std = (steps.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert_relative_eq!(std, 0.1f64.sqrt() / 2.0, epsilon = 0.01);
    }

    #[test]
    fn test_initial_state() {
        let sim = DmcSimulation::new(GaussianWell::default(), small_params()).unwrap();
        assert_eq!(sim.n(), 100);
        assert_eq!(sim.n_prev(), 100);
        assert_eq!(sim.population().len(), 100);
        assert_eq!(sim.steps_taken(), 0);
        // every replica starts at the origin
        assert_relative_eq!(sim.reference_energy().unwrap(), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_potential_seeds_zero() {
        let sim = DmcSimulation::new(ZeroPotential, DmcParams::default()).unwrap();
        assert_eq!(sim.reference_energy(), Some(0.0));
    }

    #[test]
    fn test_walk_moves_only_coordinates() {
        let mut sim = DmcSimulation::new(ZeroPotential, small_params()).unwrap();
        sim.walk();
        assert_eq!(sim.population().len(), 100);
        assert_eq!(sim.population().alive_count(), 100);
        for replica in sim.population().iter() {
            assert_eq!(replica.coordinates(), replica.last_displacement());
            assert!(replica.coordinates()[0] != 0.0);
        }
    }

    #[test]
    fn test_neutral_branching_conserves_population() {
        for n_particles in 2..5 {
            let params = DmcParams {
                n_particles,
                ..small_params()
            };
            let mut sim = DmcSimulation::new(ConstantPotential { value: -1.5 }, params).unwrap();
            let pairs = (n_particles * (n_particles - 1) / 2) as f64;
            for _ in 0..50 {
                let record = sim.step().unwrap();
                assert_eq!(record.n, 100);
                assert_eq!(record.n_prev, 100);
                assert_relative_eq!(record.e_ref, -1.5 * pairs, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_step_keeps_dimension_and_liveness() {
        let params = DmcParams {
            n_particles: 4,
            diffusion: Diffusion::ParticleFrame,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(GaussianWell::default(), params).unwrap();
        for _ in 0..30 {
            let record = sim.step().unwrap();
            assert_eq!(record.n, sim.population().len());
            assert!(sim.population().iter().all(|r| r.is_alive()));
            assert!(sim.population().iter().all(|r| r.dim() == 3));
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let run = |seed: u64| {
            let params = DmcParams {
                seed,
                ..small_params()
            };
            let mut sim = DmcSimulation::new(GaussianWell::default(), params).unwrap();
            (0..40).map(|_| sim.step().unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn test_count_tracks_previous_size() {
        let mut sim = DmcSimulation::new(GaussianWell::default(), small_params()).unwrap();
        let first = sim.step().unwrap();
        let second = sim.step().unwrap();
        assert_eq!(first.n_prev, 100);
        assert_eq!(second.n_prev, first.n);
        assert_eq!(sim.steps_taken(), 2);
    }

    #[test]
    fn test_branch_kills_high_potential() {
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Target,
            },
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(1.0e6), params).unwrap();
        sim.walk();
        sim.update_reference_energy().unwrap();
        assert_eq!(sim.branch().unwrap(), 0);
        // killed replicas stay in the arena until culled
        assert_eq!(sim.population().len(), 100);
        assert_eq!(sim.population().alive_count(), 0);
        assert_eq!(sim.cull(), 100);
        assert!(sim.population().is_empty());
    }

    #[test]
    fn test_extinction_is_reported() {
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Target,
            },
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(1.0e6), params).unwrap();
        let record = sim.step().unwrap();
        assert_eq!(record.n, 0);

        let err = sim.step().unwrap_err();
        assert!(matches!(err, DmcError::EmptyPopulation { step: 1 }));
        assert!(matches!(
            sim.update_reference_energy(),
            Err(DmcError::EmptyPopulation { .. })
        ));
    }

    #[test]
    fn test_clones_are_not_branched_twice() {
        // weight e^10 gives every replica the maximum of 3 descendants
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Target,
            },
            max_replicas: None,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(-100.0), params).unwrap();
        let record = sim.step().unwrap();
        assert_eq!(record.n, 300);
    }

    #[test]
    fn test_overflow_fail_aborts_before_branching() {
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Target,
            },
            max_replicas: Some(150),
            overflow: OverflowPolicy::Fail,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(-100.0), params).unwrap();
        let err = sim.step().unwrap_err();
        match err {
            DmcError::PopulationOverflow { step, requested, max } => {
                assert_eq!(step, 0);
                assert_eq!(requested, 300);
                assert_eq!(max, 150);
            }
            other => panic!("unexpected error: {}", other),
        }
        // walk already ran, but nothing was killed or cloned and the step was not counted
        assert_eq!(sim.population().len(), 100);
        assert_eq!(sim.population().alive_count(), 100);
        assert_eq!(sim.steps_taken(), 0);
        assert!(sim
            .population()
            .iter()
            .all(|r| r.coordinates() == r.last_displacement()));
    }

    #[test]
    fn test_overflow_cap_stops_at_ceiling() {
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Target,
            },
            max_replicas: Some(150),
            overflow: OverflowPolicy::Cap,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(-100.0), params).unwrap();
        let record = sim.step().unwrap();
        assert_eq!(record.n, 150);
        assert!(sim.population().iter().all(|r| r.is_alive()));
    }

    #[test]
    fn test_accumulate_against_previous_count() {
        let params = DmcParams {
            reference: ReferenceUpdate::Accumulate {
                baseline: CountBaseline::Previous,
            },
            max_replicas: None,
            control_strength: 0.5,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(step_potential(-100.0), params).unwrap();
        let first = sim.step().unwrap();
        assert_eq!(first.e_ref, 0.0);
        assert_eq!(first.n, 300);

        // N = 300, N_prev = 100
        let second = sim.step().unwrap();
        assert_relative_eq!(second.e_ref, 0.5 * (1.0 - 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_kinetic_correction() {
        let params = DmcParams {
            kinetic_correction: true,
            ..small_params()
        };
        let mut sim = DmcSimulation::new(ZeroPotential, params).unwrap();
        assert_eq!(sim.reference_energy(), Some(0.0));

        sim.walk();
        let kinetic = sim.mean_kinetic_energy();
        assert!(kinetic > 0.0);
        let e_ref = sim.update_reference_energy().unwrap();
        assert_relative_eq!(e_ref, kinetic, epsilon = 1e-12);
    }

    #[test]
    fn test_dump_replicas() {
        let sim = DmcSimulation::new(ZeroPotential, small_params()).unwrap();
        let dump = sim.dump_replicas();
        assert_eq!(dump.lines().count(), 100);
        assert!(dump.starts_with("replica[0]: alive=true"));
    }

    #[test]
    fn test_run_rejects_empty_run() {
        let run = RunParams {
            n_steps: 0,
            ..RunParams::default()
        };
        assert!(run_dmc(ZeroPotential, small_params(), &run).is_err());
    }

    #[test]
    fn test_run_collects_history() {
        let run = RunParams {
            n_steps: 60,
            window_fraction: 0.5,
            log_interval: 0,
        };
        let results = run_dmc(ConstantPotential { value: 2.0 }, small_params(), &run).unwrap();
        assert_eq!(results.history.len(), 60);
        assert_eq!(results.window_samples, 30);
        assert_eq!(results.final_population, 100);
        assert_relative_eq!(results.energy, 2.0, epsilon = 1e-12);
        assert_relative_eq!(results.std_dev, 0.0, epsilon = 1e-12);
    }
}
