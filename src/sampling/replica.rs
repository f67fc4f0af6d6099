//! A single DMC replica (walker) of a 1D few-body chain.

use nalgebra::DVector;

use crate::error::DmcError;
use crate::potential::{total_potential, Potential};

/// One stochastic sample of the relative particle positions.
///
/// `coordinates` holds the `n - 1` offsets of the first particles relative to
/// the last one; its length never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Replica {
    alive: bool,
    coordinates: DVector<f64>,
    /// Displacement applied by the most recent diffusion step
    last_displacement: DVector<f64>,
}

impl Replica {
    /// A live replica with every particle at the origin.
    pub fn new(dim: usize) -> Self {
        Self {
            alive: true,
            coordinates: DVector::zeros(dim),
            last_displacement: DVector::zeros(dim),
        }
    }

    pub fn from_coordinates(coordinates: DVector<f64>) -> Self {
        let dim = coordinates.len();
        Self {
            alive: true,
            coordinates,
            last_displacement: DVector::zeros(dim),
        }
    }

    pub fn dim(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn coordinates(&self) -> &DVector<f64> {
        &self.coordinates
    }

    pub fn last_displacement(&self) -> &DVector<f64> {
        &self.last_displacement
    }

    /// Live copy carrying the parent's coordinates and last displacement.
    pub fn spawn(&self) -> Self {
        Self {
            alive: true,
            ..self.clone()
        }
    }

    /// Record `dx` as the last displacement, then move by it.
    pub fn displace(&mut self, dx: DVector<f64>) {
        debug_assert_eq!(dx.len(), self.coordinates.len());
        self.coordinates += &dx;
        self.last_displacement = dx;
    }

    pub fn potential_energy<V: Potential + ?Sized>(&self, potential: &V) -> Result<f64, DmcError> {
        total_potential(potential, self.coordinates.as_slice())
    }
}
