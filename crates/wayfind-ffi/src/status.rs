//! C-compatible status codes.
//!
//! [`WayfindPlanStatus`] mirrors [`PlanStatus`] value for value, so a code
//! can double as a process exit code. `1` is never used. Panics caught at
//! the boundary get their own negative code.

use std::ffi::CStr;

use wayfind_core::{PlanError, PlanStatus};

/// Status returned by [`wayfind_plan`](crate::plan::wayfind_plan).
///
/// Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WayfindPlanStatus {
    /// A path was found (possibly truncated to the caller's buffer).
    Ok = 0,
    /// The goal is unreachable.
    NoPath = 2,
    /// Start or goal is on a blocked cell.
    InvalidArg = 3,
    /// Start or goal is outside the grid.
    OutOfBounds = 4,
    /// Null occupancy, non-positive dimensions, bad values, or a null
    /// length pointer.
    MapError = 5,
    /// A Rust panic was caught at the boundary.
    Panicked = -128,
}

impl WayfindPlanStatus {
    /// Map a raw code back to a status.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            2 => Some(Self::NoPath),
            3 => Some(Self::InvalidArg),
            4 => Some(Self::OutOfBounds),
            5 => Some(Self::MapError),
            -128 => Some(Self::Panicked),
            _ => None,
        }
    }

    /// Static NUL-terminated name.
    pub fn name(self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::NoPath => c"no_path",
            Self::InvalidArg => c"invalid_arg",
            Self::OutOfBounds => c"out_of_bounds",
            Self::MapError => c"map_error",
            Self::Panicked => c"panicked",
        }
    }
}

impl From<PlanStatus> for WayfindPlanStatus {
    fn from(s: PlanStatus) -> Self {
        match s {
            PlanStatus::Ok => Self::Ok,
            PlanStatus::NoPath => Self::NoPath,
            PlanStatus::InvalidArg => Self::InvalidArg,
            PlanStatus::OutOfBounds => Self::OutOfBounds,
            PlanStatus::MapError => Self::MapError,
        }
    }
}

impl From<&PlanError> for WayfindPlanStatus {
    fn from(e: &PlanError) -> Self {
        e.status().into()
    }
}
