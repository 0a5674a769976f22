//! A* shortest paths over occupancy grids.
//!
//! [`plan`] validates a request in a fixed order (grid structure, then
//! endpoint bounds, then endpoint occupancy) and only then searches. Each
//! call allocates its own open set and per-cell arrays, so any number of
//! calls may run concurrently over one shared [`Grid`](wayfind_grid::Grid).
//!
//! # Example
//!
//! ```
//! use wayfind_core::Cell;
//! use wayfind_grid::Grid;
//! use wayfind_search::{plan, SearchConfig};
//!
//! let grid = Grid::free(5, 5).unwrap();
//! let result = plan(&grid, Cell::new(0, 0), Cell::new(0, 4), &SearchConfig::four_connected()).unwrap();
//! assert_eq!(result.path.len(), 5);
//! assert_eq!(result.stats.cost, 4.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod config;
pub mod heuristic;
pub mod result;

pub use astar::{plan, plan_path};
pub use config::{SearchConfig, DEFAULT_BLOCK_THRESHOLD};
pub use heuristic::{Heuristic, ParseHeuristicError};
pub use result::{outcome_status, PlanOutcome, PlanResult, PlanStats};
