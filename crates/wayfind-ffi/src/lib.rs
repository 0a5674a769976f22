//! C ABI for the wayfind occupancy-grid planner.
//!
//! The exported surface is one planning call, [`wayfind_plan`], plus
//! [`wayfind_status_name`] for logging. All argument checking and
//! buffer bookkeeping lives in the safe [`boundary`] module; the
//! `extern "C"` functions only turn raw pointers into slices and back.
//!
//! No function here keeps state between calls, so concurrent calls from
//! different threads are safe.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body`, converting a Rust panic into
/// [`WayfindPlanStatus::Panicked`](crate::status::WayfindPlanStatus::Panicked).
/// Unwinding across `extern "C"` is undefined behaviour.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(code) => code,
            Err(_) => {
                tracing::error!("panic caught at the C boundary");
                $crate::status::WayfindPlanStatus::Panicked as i32
            }
        }
    };
}

pub mod boundary;
pub mod plan;
pub mod status;
pub mod types;

pub use boundary::{plan_points, write_diagnostic, write_points, BoundaryRequest, WriteReport};
pub use plan::{wayfind_plan, wayfind_status_name};
pub use status::WayfindPlanStatus;
pub use types::WayfindPoint;
