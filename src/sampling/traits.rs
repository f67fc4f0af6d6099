//! Branching decisions for DMC replicas.

/// Outcome of the birth/death decision for a single replica.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BranchingResult {
    Clone { n: usize }, // n is the number of extra copies
    Keep,               // The replica continues as is
    Kill,               // The replica is removed at the end of the step
}

impl BranchingResult {
    /// Map a descendant count `m` onto a decision: no descendants kills the
    /// replica, one keeps it, and every further descendant is a clone.
    pub fn from_multiplicity(m: usize) -> Self {
        match m {
            0 => BranchingResult::Kill,
            1 => BranchingResult::Keep,
            _ => BranchingResult::Clone { n: m - 1 },
        }
    }

    /// Number of replicas this decision leaves behind, the parent included.
    pub fn descendants(&self) -> usize {
        match self {
            BranchingResult::Kill => 0,
            BranchingResult::Keep => 1,
            BranchingResult::Clone { n } => n + 1,
        }
    }
}
