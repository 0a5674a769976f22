//! Brute-force reference planner and path checks.
//!
//! Everything here is written for obviousness over speed: neighbour
//! generation is re-derived from the movement rules and the open set is a
//! linear scan.

use wayfind_core::Cell;
use wayfind_grid::Grid;

fn passable(grid: &Grid, cell: Cell, block_threshold: i32) -> bool {
    grid.occupancy_at(cell)
        .map(|v| i32::from(v) < block_threshold)
        .unwrap_or(false)
}

/// Cost of a single move from `a` to `b`, or `None` if the move is
/// illegal: not adjacent, diagonal when diagonals are off, onto a blocked
/// cell, or squeezing between two cells of which either is blocked.
pub fn move_cost(
    grid: &Grid,
    a: Cell,
    b: Cell,
    allow_diagonal: bool,
    block_threshold: i32,
) -> Option<f64> {
    let (dr, dc) = (b.row - a.row, b.col - a.col);
    if !passable(grid, b, block_threshold) {
        return None;
    }
    match (dr.abs(), dc.abs()) {
        (1, 0) | (0, 1) => Some(1.0),
        (1, 1) if allow_diagonal => {
            let side_a = Cell::new(a.row, b.col);
            let side_b = Cell::new(b.row, a.col);
            if passable(grid, side_a, block_threshold) && passable(grid, side_b, block_threshold) {
                Some(2f64.sqrt())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Minimum path cost from `start` to `goal` by exhaustive Dijkstra, or
/// `None` if either endpoint is blocked or out of bounds or the goal is
/// unreachable.
pub fn reference_cost(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    allow_diagonal: bool,
    block_threshold: i32,
) -> Option<f64> {
    if !passable(grid, start, block_threshold) || !passable(grid, goal, block_threshold) {
        return None;
    }
    let n = grid.cell_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[grid.index_of(start)?] = 0.0;

    loop {
        let next = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
        let Some(i) = next else { break };
        done[i] = true;
        let here = grid.cell_at(i);
        for dr in -1..=1 {
            for dc in -1..=1 {
                let Some(there) = here.checked_offset(dr, dc) else {
                    continue;
                };
                let Some(cost) = move_cost(grid, here, there, allow_diagonal, block_threshold)
                else {
                    continue;
                };
                let Some(j) = grid.index_of(there) else {
                    continue;
                };
                if dist[i] + cost < dist[j] {
                    dist[j] = dist[i] + cost;
                }
            }
        }
    }

    let d = dist[grid.index_of(goal)?];
    d.is_finite().then_some(d)
}

/// Sum of move costs along `path`, assuming each move is legal.
pub fn path_cost(path: &[Cell]) -> f64 {
    path.windows(2)
        .map(|w| {
            if w[0].row != w[1].row && w[0].col != w[1].col {
                2f64.sqrt()
            } else {
                1.0
            }
        })
        .sum()
}

/// `true` iff `path` is non-empty, starts at `start`, ends at `goal`, and
/// every consecutive pair is a legal move.
pub fn is_valid_path(
    grid: &Grid,
    path: &[Cell],
    start: Cell,
    goal: Cell,
    allow_diagonal: bool,
    block_threshold: i32,
) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|&c| passable(grid, c, block_threshold))
        && path
            .windows(2)
            .all(|w| move_cost(grid, w[0], w[1], allow_diagonal, block_threshold).is_some())
}
