//! Search results.

use wayfind_core::{Cell, PlanError, PlanStatus};

/// Statistics of a successful search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanStats {
    /// Sum of step costs along the path. `0.0` when start equals goal.
    pub cost: f64,
    /// Nodes popped from the open set and expanded, excluding stale
    /// entries and the final goal pop.
    pub expanded: usize,
    /// Wall-clock time spent in the search.
    pub elapsed_ms: f64,
}

/// A path from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResult {
    /// Cells in travel order. Never empty.
    pub path: Vec<Cell>,
    /// Search statistics.
    pub stats: PlanStats,
}

impl PlanResult {
    /// Number of cells on the path.
    pub fn len_cells(&self) -> usize {
        self.path.len()
    }

    /// First cell of the path.
    pub fn start(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Last cell of the path.
    pub fn goal(&self) -> Option<Cell> {
        self.path.last().copied()
    }
}

/// Terminal outcome of one planning call.
pub type PlanOutcome = Result<PlanResult, PlanError>;

/// Status code for an outcome: `Ok` on success, the error's status
/// otherwise.
pub fn outcome_status(outcome: &PlanOutcome) -> PlanStatus {
    match outcome {
        Ok(_) => PlanStatus::Ok,
        Err(e) => e.status(),
    }
}
