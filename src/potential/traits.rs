//! Pair potential trait and the total potential of a 1D particle chain.
//!
//! A replica stores `n - 1` offsets of the first particles relative to the last
//! one. Every pair of particles interacts once: the stored offsets cover the
//! pairs involving the last particle, and the differences between offsets cover
//! the remaining pairs.

use crate::error::DmcError;

/// Pairwise interaction `V(r)` between two particles at separation `r`.
///
/// Implementations must be pure functions of `r`.
pub trait Potential {
    fn evaluate(&self, r: f64) -> f64;
}

impl<F> Potential for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, r: f64) -> f64 {
        self(r)
    }
}

/// Total potential energy of one configuration of relative offsets.
///
/// Stored offsets are passed to `V` as they are; derived separations between
/// non-reference particles are passed as distances `|x_i - x_j|`.
pub fn total_potential<V: Potential + ?Sized>(
    potential: &V,
    coordinates: &[f64],
) -> Result<f64, DmcError> {
    if coordinates.is_empty() {
        return Err(DmcError::invalid("there should be at least 2 particles"));
    }

    let mut v_tot: f64 = coordinates.iter().map(|&x| potential.evaluate(x)).sum();

    for i in 0..coordinates.len() {
        for j in (i + 1)..coordinates.len() {
            v_tot += potential.evaluate((coordinates[i] - coordinates[j]).abs());
        }
    }

    Ok(v_tot)
}
