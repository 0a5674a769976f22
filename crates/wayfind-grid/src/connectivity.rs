//! 4- and 8-connected movement over a grid.
//!
//! Diagonal moves are subject to corner-cut prevention: stepping from
//! `(r, c)` to `(r + dr, c + dc)` requires both `(r, c + dc)` and
//! `(r + dr, c)` to be free, otherwise the diagonal is skipped even when
//! its target is free.

use smallvec::SmallVec;
use wayfind_core::Cell;

use crate::grid::Grid;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Axis-aligned offsets, in expansion order: S, N, E, W.
const OFFSETS_4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Axis-aligned then diagonal offsets: S, N, E, W, SE, SW, NE, NW.
const OFFSETS_8: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Movement model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// North/south/east/west, unit cost.
    Four,
    /// Adds the four diagonals at cost `sqrt(2)`.
    Eight,
}

impl Connectivity {
    /// `Eight` when diagonals are allowed, `Four` otherwise.
    pub fn from_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::Eight
        } else {
            Self::Four
        }
    }

    /// Neighbour offsets `(dr, dc)` in expansion order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }
}

/// One legal move out of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Destination cell.
    pub to: Cell,
    /// `1.0` for axis-aligned moves, `sqrt(2)` for diagonals.
    pub cost: f64,
}

impl Grid {
    /// Legal moves out of `from` under `connectivity`, where a cell is
    /// passable iff its occupancy is below `block_threshold`.
    ///
    /// Only the bounds of `from` are checked, not its occupancy. An
    /// out-of-bounds `from` has no moves.
    pub fn steps(
        &self,
        from: Cell,
        connectivity: Connectivity,
        block_threshold: i32,
    ) -> SmallVec<[Step; 8]> {
        let mut out = SmallVec::new();
        if !self.in_bounds(from) {
            return out;
        }
        let free = |dr: i32, dc: i32| {
            from.checked_offset(dr, dc)
                .is_some_and(|cell| self.is_free(cell, block_threshold))
        };
        for &(dr, dc) in connectivity.offsets() {
            let Some(to) = from.checked_offset(dr, dc) else {
                continue;
            };
            if !self.is_free(to, block_threshold) {
                continue;
            }
            let diagonal = dr != 0 && dc != 0;
            if diagonal && (!free(0, dc) || !free(dr, 0)) {
                continue;
            }
            let cost = if diagonal { DIAGONAL_COST } else { 1.0 };
            out.push(Step { to, cost });
        }
        out
    }
}
