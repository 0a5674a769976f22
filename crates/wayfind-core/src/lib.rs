//! Core types for the wayfind grid planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate conventions shared by every other crate ([`Cell`] for the
//! engine, [`Point`] for callers), the terminal [`PlanStatus`] and
//! [`LoadStatus`] classifications, and the error types that carry enough
//! context to produce actionable diagnostics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod status;

pub use cell::{Cell, Point};
pub use error::{Endpoint, GridError, PlanError};
pub use status::{LoadStatus, PlanStatus};
