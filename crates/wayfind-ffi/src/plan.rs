//! Exported planning functions.

use std::ffi::c_char;

use tracing::debug;
use wayfind_core::Point;

use crate::boundary::{
    plan_points, write_diagnostic, write_points, BoundaryRequest, TRUNCATED_MESSAGE,
};
use crate::status::WayfindPlanStatus;
use crate::types::WayfindPoint;

#[allow(unsafe_code)]
fn put_diagnostic(errbuf: *mut c_char, errbuf_len: i32, message: &str) {
    if errbuf.is_null() || errbuf_len <= 0 {
        return;
    }
    // SAFETY: errbuf points to errbuf_len writable bytes per caller contract.
    let buf = unsafe { std::slice::from_raw_parts_mut(errbuf.cast::<u8>(), errbuf_len as usize) };
    write_diagnostic(buf, message);
}

/// Plan a path on a row-major occupancy grid.
///
/// `occ` holds `rows * cols` values in `[0, 100]`; cells at or above
/// `block_threshold` are impassable. Start and goal are `(x, y)` with `x`
/// the column. A non-zero `allow_diagonal` enables 8-connected movement
/// with the octile heuristic; otherwise movement is 4-connected with the
/// Manhattan heuristic.
///
/// Path retrieval is two-phase. With `path_out` null (or `*path_len_inout
/// <= 0`), `*path_len_inout` receives the number of points in the path.
/// Otherwise up to `*path_len_inout` points are written start first and
/// `*path_len_inout` receives the count written; a path longer than the
/// buffer is cut short, the diagnostic says "truncated", and the status
/// is still `Ok`. When start equals goal the reported length is `0`.
///
/// On failure `*path_len_inout` is set to `0` and a message is written to
/// `errbuf` (NUL-terminated, at most `errbuf_len` bytes). `errbuf` may be
/// null.
///
/// Returns a [`WayfindPlanStatus`] code.
///
/// # Safety
///
/// `occ` must point to `rows * cols` readable `int32_t`s, `path_out` (if
/// non-null) to `*path_len_inout` writable points, and `errbuf` (if
/// non-null) to `errbuf_len` writable bytes.
#[no_mangle]
#[allow(unsafe_code, clippy::too_many_arguments)]
pub extern "C" fn wayfind_plan(
    occ: *const i32,
    rows: i32,
    cols: i32,
    sx: i32,
    sy: i32,
    gx: i32,
    gy: i32,
    block_threshold: i32,
    allow_diagonal: i32,
    path_out: *mut WayfindPoint,
    path_len_inout: *mut i32,
    errbuf: *mut c_char,
    errbuf_len: i32,
) -> i32 {
    ffi_guard!({
        if occ.is_null() || rows <= 0 || cols <= 0 || path_len_inout.is_null() {
            put_diagnostic(
                errbuf,
                errbuf_len,
                "invalid arguments: null pointer or non-positive dimensions",
            );
            if !path_len_inout.is_null() {
                // SAFETY: checked non-null; caller guarantees it is writable.
                unsafe { *path_len_inout = 0 };
            }
            return WayfindPlanStatus::MapError as i32;
        }
        let Some(n) = (rows as usize).checked_mul(cols as usize) else {
            put_diagnostic(errbuf, errbuf_len, "invalid arguments: grid too large");
            // SAFETY: checked non-null above.
            unsafe { *path_len_inout = 0 };
            return WayfindPlanStatus::MapError as i32;
        };

        // SAFETY: occ points to rows * cols values per caller contract.
        let occupancy = unsafe { std::slice::from_raw_parts(occ, n) };
        let request = BoundaryRequest {
            occupancy,
            rows,
            cols,
            start: Point::new(sx, sy),
            goal: Point::new(gx, gy),
            block_threshold,
            allow_diagonal: allow_diagonal != 0,
        };
        debug!(rows, cols, sx, sy, gx, gy, block_threshold, allow_diagonal, "wayfind_plan");

        let path = match plan_points(&request) {
            Ok(path) => path,
            Err(e) => {
                put_diagnostic(errbuf, errbuf_len, &e.to_string());
                // SAFETY: checked non-null above.
                unsafe { *path_len_inout = 0 };
                return WayfindPlanStatus::from(&e) as i32;
            }
        };

        // SAFETY: checked non-null above.
        let capacity = unsafe { *path_len_inout };
        let out = if path_out.is_null() || capacity <= 0 {
            None
        } else {
            // SAFETY: path_out points to capacity writable points per caller contract.
            Some(unsafe { std::slice::from_raw_parts_mut(path_out, capacity as usize) })
        };
        let report = write_points(&path, out);
        if report.is_truncated() {
            put_diagnostic(errbuf, errbuf_len, TRUNCATED_MESSAGE);
        }
        // Saturates on grids with more than i32::MAX cells.
        let reported = i32::try_from(report.reported_len()).unwrap_or(i32::MAX);
        // SAFETY: checked non-null above.
        unsafe { *path_len_inout = reported };
        WayfindPlanStatus::Ok as i32
    })
}

/// Static NUL-terminated name of a status code, or `"unknown"`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wayfind_status_name(code: i32) -> *const c_char {
    WayfindPlanStatus::from_code(code)
        .map(WayfindPlanStatus::name)
        .unwrap_or(c"unknown")
        .as_ptr()
}
