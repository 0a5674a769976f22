//! Occupancy grids for wayfind.
//!
//! This crate defines the [`Grid`] data model (a row-major field of
//! occupancy values in `[0, 100]`), the [`Connectivity`] neighbourhoods the
//! planner walks, optional world-coordinate metadata ([`MapMeta`]), and the
//! comma-separated table loader ([`load_occupancy_csv`]).
//!
//! A `Grid` is immutable once built and is `Send + Sync`, so one grid can
//! back any number of concurrent searches.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod grid;
pub mod loader;
pub mod meta;

pub use connectivity::{Connectivity, Step, DIAGONAL_COST};
pub use grid::{Grid, MAX_OCCUPANCY};
pub use loader::{
    load_occupancy_csv, parse_occupancy_csv, try_load_occupancy_csv, LoadError,
};
pub use meta::MapMeta;
