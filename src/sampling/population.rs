//! Replica population stored as a dense arena.
//!
//! During a step the arena may hold dead replicas next to live ones; they are
//! removed in a single compaction pass by [`Population::cull`].

use std::fmt;

use nalgebra::DVector;

use super::replica::Replica;

#[derive(Clone, Debug, Default)]
pub struct Population {
    replicas: Vec<Replica>,
}

impl Population {
    /// `n` live replicas with `dim` relative coordinates each, all at the origin.
    pub fn with_size(n: usize, dim: usize) -> Self {
        Self {
            replicas: (0..n).map(|_| Replica::new(dim)).collect(),
        }
    }

    /// Number of replicas in the arena, dead ones included.
    pub fn len(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicas.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.replicas.iter().filter(|r| r.is_alive()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replica> {
        self.replicas.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Replica> {
        self.replicas.iter().filter(|r| r.is_alive())
    }

    pub(crate) fn replicas_mut(&mut self) -> &mut [Replica] {
        &mut self.replicas
    }

    pub fn push(&mut self, replica: Replica) {
        self.replicas.push(replica);
    }

    /// Drop every dead replica, keeping the survivors in order.
    /// Returns the number removed.
    pub fn cull(&mut self) -> usize {
        let before = self.replicas.len();
        self.replicas.retain(|r| r.is_alive());
        before - self.replicas.len()
    }

    /// Per-coordinate mean of the last displacement over live replicas.
    pub fn mean_displacement(&self) -> Option<DVector<f64>> {
        let mut alive = self.alive();
        let first = alive.next()?;
        let mut sum = first.last_displacement().clone();
        let mut count = 1usize;
        for replica in alive {
            sum += replica.last_displacement();
            count += 1;
        }
        Some(sum / count as f64)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ii, replica) in self.replicas.iter().enumerate() {
            let coords: Vec<String> = replica
                .coordinates()
                .iter()
                .map(|x| format!("{:.6}", x))
                .collect();
            writeln!(
                f,
                "replica[{}]: alive={} coords=[{}]",
                ii,
                replica.is_alive(),
                coords.join(", ")
            )?;
        }
        Ok(())
    }
}
