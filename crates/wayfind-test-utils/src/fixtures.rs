//! Grid fixtures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfind_core::Cell;
use wayfind_grid::Grid;

/// Occupancy written for `.` and for open cells of [`random_grid`].
pub const FREE: u8 = 0;
/// Occupancy written for `#` and for obstacles of [`random_grid`].
pub const BLOCKED: u8 = 100;

/// Build a grid from a picture, one text line per row.
///
/// `.` is free, `#` is fully blocked, and a digit `d` is occupancy
/// `d * 10`. Leading and trailing whitespace on each line is ignored, as
/// are blank lines.
///
/// ```
/// let g = wayfind_test_utils::grid_from_ascii(
///     "
///     ..#
///     .5.
///     ",
/// );
/// assert_eq!(g.occupancy(), &[0, 0, 100, 0, 50, 0]);
/// ```
///
/// # Panics
///
/// On ragged rows, unknown characters, or an empty picture.
pub fn grid_from_ascii(picture: &str) -> Grid {
    let rows: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "empty grid picture");
    let cols = rows[0].chars().count();
    let mut occupancy = Vec::with_capacity(rows.len() * cols);
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "row {r} has a different width than row 0"
        );
        for ch in line.chars() {
            let v = match ch {
                '.' => FREE,
                '#' => BLOCKED,
                d @ '0'..='9' => (d as u8 - b'0') * 10,
                other => panic!("unknown grid character {other:?} in row {r}"),
            };
            occupancy.push(v);
        }
    }
    Grid::new(rows.len(), cols, occupancy).expect("picture produced an invalid grid")
}

/// A `rows x cols` grid where each cell is independently [`BLOCKED`] with
/// probability `density`, reproducible from `seed`.
pub fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    let occupancy = (0..rows * cols)
        .map(|_| if rng.gen_bool(density) { BLOCKED } else { FREE })
        .collect();
    Grid::new(rows, cols, occupancy).expect("random grid dimensions must be positive")
}

/// A uniformly chosen cell with occupancy below `block_threshold`,
/// reproducible from `seed`, or `None` when every cell is blocked.
pub fn random_free_cell(grid: &Grid, block_threshold: i32, seed: u64) -> Option<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let free: Vec<usize> = grid
        .occupancy()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| i32::from(v) < block_threshold)
        .map(|(i, _)| i)
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(grid.cell_at(free[rng.gen_range(0..free.len())]))
}
