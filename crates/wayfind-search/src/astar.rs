//! The A* engine.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::{debug, debug_span, trace};
use wayfind_core::{Cell, Endpoint, PlanError};
use wayfind_grid::Grid;

use crate::config::SearchConfig;
use crate::result::{PlanOutcome, PlanResult, PlanStats};

const NO_PARENT: usize = usize::MAX;

/// Open-set entry. Duplicates of a cell are allowed; entries whose `g`
/// exceeds the cell's best known cost are discarded when popped.
#[derive(Clone, Copy, Debug)]
struct OpenNode {
    index: usize,
    g: f64,
    h: f64,
    seq: u64,
}

impl OpenNode {
    fn f(&self) -> f64 {
        self.g + self.h
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    // Reversed for a min-heap: smaller f, then smaller h, then earlier push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .total_cmp(&self.f())
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a minimum-cost path from `start` to `goal`.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the grid must be structurally valid ([`PlanError::MapError`]);
/// 2. start, then goal, must be in bounds ([`PlanError::OutOfBounds`]);
/// 3. start, then goal, must be below the block threshold
///    ([`PlanError::InvalidArg`]).
///
/// Only then does the search run. An exhausted open set yields
/// [`PlanError::NoPath`]. When `start == goal` the path is `[start]` with
/// zero cost and zero expansions.
///
/// The path is optimal whenever
/// [`SearchConfig::heuristic_is_admissible`] holds. Results are
/// deterministic for identical inputs.
pub fn plan(grid: &Grid, start: Cell, goal: Cell, config: &SearchConfig) -> PlanOutcome {
    let span = debug_span!(
        "plan",
        rows = grid.rows(),
        cols = grid.cols(),
        %start,
        %goal,
        connectivity = ?config.connectivity(),
        heuristic = %config.heuristic,
    );
    let _enter = span.enter();

    let outcome = validate(grid, start, goal, config)
        .and_then(|(start_idx, goal_idx)| search(grid, start_idx, goal_idx, config));
    match &outcome {
        Ok(r) => debug!(
            cost = r.stats.cost,
            expanded = r.stats.expanded,
            len = r.path.len(),
            "path found"
        ),
        Err(e) => debug!(status = %e.status(), "{e}"),
    }
    outcome
}

/// Like [`plan`], discarding the failure reason.
pub fn plan_path(grid: &Grid, start: Cell, goal: Cell, config: &SearchConfig) -> Option<PlanResult> {
    plan(grid, start, goal, config).ok()
}

/// Returns the row-major indices of start and goal.
fn validate(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
) -> Result<(usize, usize), PlanError> {
    grid.validate()?;

    let index = |endpoint, cell| {
        grid.index_of(cell).ok_or(PlanError::OutOfBounds {
            endpoint,
            cell,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    };
    let start_idx = index(Endpoint::Start, start)?;
    let goal_idx = index(Endpoint::Goal, goal)?;

    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        let occupancy = grid.occupancy_at(cell)?;
        if i32::from(occupancy) >= config.block_threshold {
            return Err(PlanError::InvalidArg {
                endpoint,
                cell,
                occupancy,
                block_threshold: config.block_threshold,
            });
        }
    }
    Ok((start_idx, goal_idx))
}

fn search(grid: &Grid, start_idx: usize, goal_idx: usize, config: &SearchConfig) -> PlanOutcome {
    let started = Instant::now();
    let connectivity = config.connectivity();
    let heuristic = config.heuristic;

    let n = grid.cell_count();
    let mut best = vec![f64::INFINITY; n];
    let mut parent = vec![NO_PARENT; n];
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut expanded = 0usize;

    let start = grid.cell_at(start_idx);
    let goal = grid.cell_at(goal_idx);

    best[start_idx] = 0.0;
    open.push(OpenNode {
        index: start_idx,
        g: 0.0,
        h: heuristic.estimate(start, goal),
        seq,
    });

    while let Some(node) = open.pop() {
        if node.g > best[node.index] {
            trace!(index = node.index, g = node.g, "stale entry");
            continue;
        }

        if node.index == goal_idx {
            let path = reconstruct(grid, &parent, start_idx, goal_idx);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            return Ok(PlanResult {
                path,
                stats: PlanStats {
                    cost: node.g,
                    expanded,
                    elapsed_ms,
                },
            });
        }

        expanded += 1;
        let here = grid.cell_at(node.index);
        for step in grid.steps(here, connectivity, config.block_threshold) {
            let Some(next) = grid.index_of(step.to) else {
                continue;
            };
            let g = node.g + step.cost;
            if g < best[next] {
                best[next] = g;
                parent[next] = node.index;
                seq += 1;
                open.push(OpenNode {
                    index: next,
                    g,
                    h: heuristic.estimate(step.to, goal),
                    seq,
                });
            }
        }
    }

    Err(PlanError::NoPath {
        start,
        goal,
        expanded,
    })
}

fn reconstruct(grid: &Grid, parent: &[usize], start_idx: usize, goal_idx: usize) -> Vec<Cell> {
    let mut path = vec![grid.cell_at(goal_idx)];
    let mut at = goal_idx;
    while at != start_idx {
        match parent.get(at) {
            Some(&p) if p != NO_PARENT => {
                at = p;
                path.push(grid.cell_at(at));
            }
            _ => break,
        }
    }
    path.reverse();
    path
}
