//! Wayfind: A* path planning over 2-D occupancy grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the wayfind sub-crates. The C ABI lives separately in `wayfind-ffi`.
//!
//! # Quick start
//!
//! ```rust
//! use wayfind::prelude::*;
//!
//! let grid = parse_occupancy_csv(
//!     "0,0,0\n\
//!      100,100,0\n\
//!      0,0,0\n"
//!         .as_bytes(),
//! )
//! .unwrap();
//!
//! let result = plan(&grid, Cell::new(0, 0), Cell::new(2, 0), &SearchConfig::four_connected()).unwrap();
//! assert_eq!(result.stats.cost, 6.0);
//! assert_eq!(result.path.len(), 7);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wayfind-core` | Coordinates, statuses, error types |
//! | [`grid`] | `wayfind-grid` | Occupancy grid, world metadata, CSV loader |
//! | [`search`] | `wayfind-search` | Search configuration, heuristics, A* |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, statuses and error types (`wayfind-core`).
pub use wayfind_core as types;

/// Occupancy grid, world metadata and CSV loader (`wayfind-grid`).
pub use wayfind_grid as grid;

/// Search configuration, heuristics and the A* engine (`wayfind-search`).
pub use wayfind_search as search;

/// Common imports for typical wayfind usage.
///
/// ```rust
/// use wayfind::prelude::*;
/// ```
pub mod prelude {
    // Coordinates and outcomes
    pub use wayfind_core::{Cell, Endpoint, Point, PlanStatus};

    // Errors
    pub use wayfind_core::{GridError, PlanError};
    pub use wayfind_grid::LoadError;

    // Grid
    pub use wayfind_grid::{load_occupancy_csv, parse_occupancy_csv, Grid, MapMeta};

    // Search
    pub use wayfind_search::{plan, Heuristic, PlanOutcome, PlanResult, PlanStats, SearchConfig};
}
