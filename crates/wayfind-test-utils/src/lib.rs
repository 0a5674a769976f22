//! Test fixtures and reference planners for wayfind development.
//!
//! - [`grid_from_ascii`] builds small grids from pictures.
//! - [`random_grid`] builds seeded random obstacle fields.
//! - [`reference_cost`] is a brute-force Dijkstra that the A* engine is
//!   checked against. It shares no code with the engine's neighbour
//!   generation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{grid_from_ascii, random_free_cell, random_grid, BLOCKED, FREE};
pub use reference::{is_valid_path, move_cost, path_cost, reference_cost};
