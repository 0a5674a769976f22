//! End-to-end planning scenarios on hand-drawn grids.

use wayfind_core::{Cell, Endpoint, GridError, PlanError, PlanStatus};
use wayfind_grid::Grid;
use wayfind_search::{plan, SearchConfig};
use wayfind_test_utils::grid_from_ascii;

fn c(r: i32, col: i32) -> Cell {
    Cell::new(r, col)
}

#[test]
fn detour_around_wall() {
    let g = grid_from_ascii(
        "
        .....
        .###.
        .#...
        .#.#.
        ...#.
        ",
    );
    let r = plan(&g, c(4, 2), c(2, 2), &SearchConfig::four_connected()).unwrap();
    assert_eq!(r.path.first(), Some(&c(4, 2)));
    assert_eq!(r.path.last(), Some(&c(2, 2)));
    assert_eq!(r.stats.cost, 2.0);
    assert_eq!(r.path, vec![c(4, 2), c(3, 2), c(2, 2)]);
}

#[test]
fn long_corridor_cost() {
    let g = grid_from_ascii(
        "
        .#...
        .#.#.
        .#.#.
        ...#.
        ",
    );
    let r = plan(&g, c(0, 0), c(0, 4), &SearchConfig::four_connected()).unwrap();
    assert_eq!(r.stats.cost, 10.0);
    assert_eq!(r.path.len(), 11);
    assert!(r.path.contains(&c(3, 1)));
}

#[test]
fn equal_cost_paths_resolved_by_remaining_estimate() {
    // (0,0)-(0,1)-(1,2) and (0,0)-(1,1)-(1,2) both cost 1 + sqrt(2), and
    // (0,1) and (1,1) enter the open set with equal f. (1,1) is closer to
    // the goal, so it is expanded first and becomes the goal's parent even
    // though (0,1) was pushed earlier.
    let g = Grid::free(2, 3).unwrap();
    let r = plan(&g, c(0, 0), c(1, 2), &SearchConfig::eight_connected()).unwrap();
    assert_eq!(r.path, vec![c(0, 0), c(1, 1), c(1, 2)]);
    assert_eq!(r.stats.expanded, 2);
    assert!((r.stats.cost - (1.0 + std::f64::consts::SQRT_2)).abs() < 1e-12);
}

#[test]
fn obstacle_rejection_ignores_detours() {
    let g = grid_from_ascii("#...\n....");
    let e = plan(&g, c(0, 0), c(1, 3), &SearchConfig::default()).unwrap_err();
    assert!(matches!(
        e,
        PlanError::InvalidArg {
            endpoint: Endpoint::Start,
            ..
        }
    ));
    assert!(e.to_string().contains("start"));
}

#[test]
fn malformed_grid_beats_everything() {
    let g = Grid::from_raw_parts(0, 4, vec![]);
    let e = plan(&g, c(-5, -5), c(100, 100), &SearchConfig::default()).unwrap_err();
    assert_eq!(e.status(), PlanStatus::MapError);
    assert!(matches!(
        e,
        PlanError::MapError(GridError::InvalidDimensions { .. })
    ));

    let g = Grid::from_raw_parts(1, 2, vec![0, 101]);
    let e = plan(&g, c(0, 0), c(0, 1), &SearchConfig::default()).unwrap_err();
    assert_eq!(
        e,
        PlanError::MapError(GridError::ValueOutOfRange { index: 1, value: 101 })
    );
}

#[test]
fn start_out_of_bounds_reported_first() {
    let g = Grid::free(3, 3).unwrap();
    let e = plan(&g, c(3, 0), c(-1, 0), &SearchConfig::default()).unwrap_err();
    match e {
        PlanError::OutOfBounds { endpoint, cell, rows, cols } => {
            assert_eq!(endpoint, Endpoint::Start);
            assert_eq!(cell, c(3, 0));
            assert_eq!((rows, cols), (3, 3));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn diagonal_squeeze_is_refused() {
    let g = grid_from_ascii(
        "
        ..#..
        ..#..
        ...#.
        ..#..
        ",
    );
    // Both diagonal exits from (2,2) would cut a blocked corner.
    let e = plan(&g, c(0, 0), c(0, 4), &SearchConfig::eight_connected()).unwrap_err();
    assert_eq!(e.status(), PlanStatus::NoPath);
}

#[test]
fn soft_cost_cells_use_threshold() {
    let g = grid_from_ascii("0540\n0000");

    let strict = SearchConfig::four_connected().with_block_threshold(40);
    let r = plan(&g, c(0, 0), c(0, 3), &strict).unwrap();
    assert_eq!(r.stats.cost, 5.0);
    assert!(r.path.iter().all(|cell| *cell != c(0, 1) && *cell != c(0, 2)));

    let lenient = SearchConfig::four_connected().with_block_threshold(60);
    let r = plan(&g, c(0, 0), c(0, 3), &lenient).unwrap();
    assert_eq!(r.path, vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3)]);
}

#[test]
fn concurrent_calls_share_a_grid() {
    let g = wayfind_test_utils::random_grid(40, 40, 0.2, 99);
    let config = SearchConfig::default();
    let free: Vec<Cell> = (0..g.cell_count())
        .filter(|&i| g.occupancy()[i] == 0)
        .map(|i| g.cell_at(i))
        .collect();
    let (start, goal) = (free[0], free[free.len() - 1]);
    let expected = plan(&g, start, goal, &config);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| plan(&g, start, goal, &config)))
            .collect();
        for h in handles {
            let got = h.join().unwrap();
            match (&got, &expected) {
                (Ok(a), Ok(b)) => {
                    assert_eq!(a.path, b.path);
                    assert_eq!(a.stats.expanded, b.stats.expanded);
                }
                (Err(a), Err(b)) => assert_eq!(a, b),
                _ => panic!("thread outcome diverged"),
            }
        }
    });
}
