//! Search configuration.

use wayfind_grid::Connectivity;

use crate::heuristic::Heuristic;

/// Occupancy at or above which a cell is impassable, unless configured.
pub const DEFAULT_BLOCK_THRESHOLD: i32 = 50;

/// Parameters of one planning call.
///
/// The default is 8-connected movement with the octile heuristic and a
/// block threshold of 50.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Enable diagonal moves (8-connectivity) with corner-cut prevention.
    pub allow_diagonal: bool,
    /// Remaining-cost estimate.
    pub heuristic: Heuristic,
    /// Cells with occupancy `>= block_threshold` are impassable.
    pub block_threshold: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            heuristic: Heuristic::Octile,
            block_threshold: DEFAULT_BLOCK_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// 4-connected movement with the Manhattan heuristic.
    pub fn four_connected() -> Self {
        Self {
            allow_diagonal: false,
            heuristic: Heuristic::Manhattan,
            block_threshold: DEFAULT_BLOCK_THRESHOLD,
        }
    }

    /// 8-connected movement with the octile heuristic.
    pub fn eight_connected() -> Self {
        Self::default()
    }

    /// Configuration used at the foreign boundary: the heuristic is
    /// derived from the diagonal flag (octile with diagonals, Manhattan
    /// without) and is not caller-selectable.
    pub fn for_boundary(allow_diagonal: bool, block_threshold: i32) -> Self {
        let base = if allow_diagonal {
            Self::eight_connected()
        } else {
            Self::four_connected()
        };
        base.with_block_threshold(block_threshold)
    }

    /// Replace the block threshold.
    pub fn with_block_threshold(mut self, block_threshold: i32) -> Self {
        self.block_threshold = block_threshold;
        self
    }

    /// Replace the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Movement model implied by `allow_diagonal`.
    pub fn connectivity(&self) -> Connectivity {
        Connectivity::from_diagonal(self.allow_diagonal)
    }

    /// Whether the heuristic never overestimates under this movement
    /// model, i.e. whether returned paths are guaranteed optimal.
    pub fn heuristic_is_admissible(&self) -> bool {
        !(self.allow_diagonal && self.heuristic == Heuristic::Manhattan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eight_octile_50() {
        let c = SearchConfig::default();
        assert!(c.allow_diagonal);
        assert_eq!(c.heuristic, Heuristic::Octile);
        assert_eq!(c.block_threshold, 50);
        assert_eq!(c.connectivity(), Connectivity::Eight);
    }

    #[test]
    fn boundary_policy_couples_heuristic_to_diagonal() {
        let four = SearchConfig::for_boundary(false, 70);
        assert_eq!(four.heuristic, Heuristic::Manhattan);
        assert_eq!(four.connectivity(), Connectivity::Four);
        assert_eq!(four.block_threshold, 70);

        let eight = SearchConfig::for_boundary(true, 30);
        assert_eq!(eight.heuristic, Heuristic::Octile);
        assert_eq!(eight.block_threshold, 30);
    }

    #[test]
    fn admissibility() {
        assert!(SearchConfig::four_connected().heuristic_is_admissible());
        assert!(SearchConfig::four_connected()
            .with_heuristic(Heuristic::Euclidean)
            .heuristic_is_admissible());
        assert!(SearchConfig::eight_connected().heuristic_is_admissible());
        assert!(!SearchConfig::eight_connected()
            .with_heuristic(Heuristic::Manhattan)
            .heuristic_is_admissible());
    }
}
