//! Benchmark grids for the wayfind planner.
//!
//! - [`open_profile`]: an obstacle-free square, the best case for A*.
//! - [`serpentine_profile`]: walls with alternating gaps, forcing a path
//!   that visits nearly every row end to end.
//! - [`to_csv`]: render a grid as loader input.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

use wayfind_core::Cell;
use wayfind_grid::Grid;

/// `size x size` free grid.
pub fn open_profile(size: usize) -> Grid {
    Grid::free(size.max(1), size.max(1)).expect("size is positive")
}

/// `size x size` grid where every odd row is a wall with one gap,
/// alternating between the right and left ends.
///
/// The start `(0, 0)` and goal `(size - 1, 0)` or `(size - 1, size - 1)`
/// are always free; use [`serpentine_endpoints`].
pub fn serpentine_profile(size: usize) -> Grid {
    let size = size.max(2);
    let mut occupancy = vec![0u8; size * size];
    for row in (1..size).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
        for col in 0..size {
            if col != gap {
                occupancy[row * size + col] = 100;
            }
        }
    }
    Grid::from_raw_parts(size, size, occupancy)
}

/// Start and goal for [`serpentine_profile`]: opposite corners of the
/// first and last free rows.
pub fn serpentine_endpoints(size: usize) -> (Cell, Cell) {
    let size = size.max(2) as i32;
    let last = if size % 2 == 0 { size - 2 } else { size - 1 };
    (Cell::new(0, 0), Cell::new(last, 0))
}

/// Render `grid` as comma-separated rows.
pub fn to_csv(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 4);
    for row in grid.occupancy().chunks(grid.cols().max(1)) {
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{v}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpentine_endpoints_are_free() {
        for size in [2, 5, 8, 33] {
            let g = serpentine_profile(size);
            assert!(g.validate().is_ok());
            let (s, t) = serpentine_endpoints(size);
            assert!(g.is_free(s, 50), "start blocked for {size}");
            assert!(g.is_free(t, 50), "goal blocked for {size}");
        }
    }

    #[test]
    fn csv_roundtrip() {
        let g = serpentine_profile(6);
        let parsed = wayfind_grid::parse_occupancy_csv(to_csv(&g).as_bytes()).unwrap();
        assert_eq!(parsed.occupancy(), g.occupancy());
    }
}
