//! Error types for grid construction and path planning.
//!
//! Organized by subsystem: [`GridError`] for structural problems with an
//! occupancy grid, [`PlanError`] for the four failure classes a planning
//! call can end in. Every variant carries the data needed to render an
//! actionable message without inspecting engine state.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;
use crate::status::PlanStatus;

/// Which end of a planning request an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start cell.
    Start,
    /// The goal cell.
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors arising from grid construction or cell queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero or negative.
    InvalidDimensions {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
    },
    /// The occupancy buffer length does not equal `rows * cols`.
    DimensionMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// An occupancy value lies outside `[0, 100]`.
    ValueOutOfRange {
        /// Row-major index of the offending cell.
        index: usize,
        /// The offending value.
        value: i64,
    },
    /// A cell query was made outside the grid.
    ///
    /// This is a precondition violation: callers must check
    /// `in_bounds` first.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "occupancy has {actual} values but rows*cols is {expected}"
                )
            }
            Self::ValueOutOfRange { index, value } => {
                write!(f, "occupancy value {value} at index {index} is outside [0, 100]")
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} outside grid [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}

/// Why a planning call did not produce a path.
///
/// Each variant maps to exactly one non-`Ok` [`PlanStatus`] via
/// [`status()`](Self::status).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The grid is structurally malformed. Checked before anything else.
    MapError(GridError),
    /// Start or goal lies outside the grid.
    OutOfBounds {
        /// Which endpoint.
        endpoint: Endpoint,
        /// The offending cell.
        cell: Cell,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// Start or goal sits on a cell at or above the block threshold.
    InvalidArg {
        /// Which endpoint.
        endpoint: Endpoint,
        /// The offending cell.
        cell: Cell,
        /// Occupancy of that cell.
        occupancy: u8,
        /// Configured block threshold.
        block_threshold: i32,
    },
    /// The open set was exhausted without reaching the goal.
    NoPath {
        /// Requested start.
        start: Cell,
        /// Requested goal.
        goal: Cell,
        /// Nodes expanded before giving up.
        expanded: usize,
    },
}

impl PlanError {
    /// Terminal status this error corresponds to.
    pub fn status(&self) -> PlanStatus {
        match self {
            Self::MapError(_) => PlanStatus::MapError,
            Self::OutOfBounds { .. } => PlanStatus::OutOfBounds,
            Self::InvalidArg { .. } => PlanStatus::InvalidArg,
            Self::NoPath { .. } => PlanStatus::NoPath,
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapError(e) => write!(f, "map error: {e}"),
            Self::OutOfBounds {
                endpoint,
                cell,
                rows,
                cols,
            } => write!(
                f,
                "{endpoint} {cell} out of bounds for {rows}x{cols} grid"
            ),
            Self::InvalidArg {
                endpoint,
                cell,
                occupancy,
                block_threshold,
            } => write!(
                f,
                "{endpoint} {cell} is blocked (occupancy {occupancy} >= threshold {block_threshold})"
            ),
            Self::NoPath {
                start,
                goal,
                expanded,
            } => write!(
                f,
                "no path from {start} to {goal} ({expanded} nodes expanded)"
            ),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MapError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PlanError {
    fn from(e: GridError) -> Self {
        Self::MapError(e)
    }
}
