//! Row-major occupancy grid.

use wayfind_core::{Cell, GridError};

use crate::meta::MapMeta;

/// Largest legal occupancy value.
pub const MAX_OCCUPANCY: u8 = 100;

/// A two-dimensional occupancy field.
///
/// Cell `(row, col)` lives at index `row * cols + col`. Values range from
/// `0` (free) to `100` (fully occupied); what counts as impassable is a
/// property of the search configuration, not of the grid.
///
/// [`Grid::new`] enforces the structural invariants. [`Grid::from_raw_parts`]
/// skips them so that foreign or hand-assembled data can be handed to the
/// planner as-is; the planner re-checks with [`validate`](Grid::validate)
/// and reports `MapError` for malformed input.
///
/// # Examples
///
/// ```
/// use wayfind_core::Cell;
/// use wayfind_grid::Grid;
///
/// let grid = Grid::new(2, 3, vec![0, 0, 100, 0, 50, 0]).unwrap();
/// assert!(grid.in_bounds(Cell::new(1, 2)));
/// assert!(!grid.in_bounds(Cell::new(2, 0)));
/// assert_eq!(grid.occupancy_at(Cell::new(0, 2)), Ok(100));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    occupancy: Vec<u8>,
    meta: Option<MapMeta>,
}

impl Grid {
    /// Build a grid, checking dimensions, buffer length, and value range.
    pub fn new(rows: usize, cols: usize, occupancy: Vec<u8>) -> Result<Self, GridError> {
        let grid = Self::from_raw_parts(rows, cols, occupancy);
        grid.validate()?;
        Ok(grid)
    }

    /// Build a grid of `rows * cols` free cells.
    pub fn free(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(rows, cols, vec![0; rows.saturating_mul(cols)])
    }

    /// Build a grid from signed values, as received across a foreign
    /// boundary. Negative dimensions and values outside `[0, 100]` are
    /// rejected.
    pub fn from_signed(rows: i32, cols: i32, values: &[i32]) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions {
                rows: rows.into(),
                cols: cols.into(),
            });
        }
        let (rows, cols) = (rows as usize, cols as usize);
        let expected = rows * cols;
        if values.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        let mut occupancy = Vec::with_capacity(expected);
        for (index, &v) in values.iter().enumerate() {
            match u8::try_from(v) {
                Ok(b) if b <= MAX_OCCUPANCY => occupancy.push(b),
                _ => {
                    return Err(GridError::ValueOutOfRange {
                        index,
                        value: v.into(),
                    })
                }
            }
        }
        Ok(Self::from_raw_parts(rows, cols, occupancy))
    }

    /// Assemble a grid without checking any invariant.
    pub fn from_raw_parts(rows: usize, cols: usize, occupancy: Vec<u8>) -> Self {
        Self {
            rows,
            cols,
            occupancy,
            meta: None,
        }
    }

    /// Attach world-coordinate metadata.
    pub fn with_meta(mut self, meta: MapMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Check the structural invariants: positive dimensions,
    /// `occupancy.len() == rows * cols`, every value in `[0, 100]`.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: self.rows as i64,
                cols: self.cols as i64,
            });
        }
        let expected = self
            .rows
            .checked_mul(self.cols)
            .ok_or(GridError::InvalidDimensions {
                rows: self.rows as i64,
                cols: self.cols as i64,
            })?;
        if self.occupancy.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: self.occupancy.len(),
            });
        }
        if let Some(index) = self.occupancy.iter().position(|&v| v > MAX_OCCUPANCY) {
            return Err(GridError::ValueOutOfRange {
                index,
                value: self.occupancy[index].into(),
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Raw row-major occupancy values.
    pub fn occupancy(&self) -> &[u8] {
        &self.occupancy
    }

    /// World-coordinate metadata, if any was attached.
    pub fn meta(&self) -> Option<&MapMeta> {
        self.meta.as_ref()
    }

    /// `true` iff `0 <= row < rows` and `0 <= col < cols`.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Row-major index of `cell`, or `None` when out of bounds.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.row as usize * self.cols + cell.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Occupancy of `cell`.
    ///
    /// Returns `Err(GridError::CellOutOfBounds)` when `cell` is outside
    /// the grid; callers are expected to check [`in_bounds`](Self::in_bounds)
    /// first.
    pub fn occupancy_at(&self, cell: Cell) -> Result<u8, GridError> {
        self.index_of(cell)
            .and_then(|i| self.occupancy.get(i).copied())
            .ok_or(GridError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// `true` iff `cell` is in bounds and its occupancy is below
    /// `block_threshold`.
    pub fn is_free(&self, cell: Cell, block_threshold: i32) -> bool {
        self.index_of(cell)
            .and_then(|i| self.occupancy.get(i))
            .is_some_and(|&v| i32::from(v) < block_threshold)
    }
}
