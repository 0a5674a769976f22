//! Grid coordinates.
//!
//! The engine addresses cells as `(row, col)`. Everything facing a caller
//! (the C ABI, the CLI, JSON output) uses `(x, y)` with `x = col` and
//! `y = row`. The two are distinct types so the transposition happens in
//! exactly one place: the `From` impls below.

use std::fmt;

/// Engine-side cell coordinate, `(row, col)`.
///
/// Coordinates are signed so that out-of-range requests (e.g. `-1`) can be
/// represented and rejected with `OutOfBounds` instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Row index, `0 <= row < rows` when in bounds.
    pub row: i32,
    /// Column index, `0 <= col < cols` when in bounds.
    pub col: i32,
}

impl Cell {
    /// Create a cell from `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this cell by `(dr, dc)`, or `None` if a coordinate would
    /// leave the `i32` range.
    pub const fn checked_offset(self, dr: i32, dc: i32) -> Option<Self> {
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// Caller-facing coordinate, `(x, y)` with `x = col` and `y = row`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position (column).
    pub x: i32,
    /// Vertical position (row).
    pub y: i32,
}

impl Point {
    /// Create a point from `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x {}, y {})", self.x, self.y)
    }
}

impl From<Cell> for Point {
    fn from(c: Cell) -> Self {
        Point { x: c.col, y: c.row }
    }
}

impl From<Point> for Cell {
    fn from(p: Point) -> Self {
        Cell { row: p.y, col: p.x }
    }
}
