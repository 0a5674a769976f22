//! Safe core of the C boundary.
//!
//! [`plan_points`] runs a request expressed the way C callers see it
//! (signed dimensions, `(x, y)` points, raw occupancy integers) and
//! [`write_points`] applies the two-phase "query length, then fetch"
//! protocol to the result. [`wayfind_plan`](crate::plan::wayfind_plan)
//! is a thin pointer-handling shell around the two.

use tracing::warn;
use wayfind_core::{Cell, PlanError, Point};
use wayfind_grid::Grid;
use wayfind_search::{plan, SearchConfig};

/// Diagnostic written when the caller's path buffer is too small.
pub const TRUNCATED_MESSAGE: &str = "path buffer too small (truncated)";

/// One planning request in caller terms.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryRequest<'a> {
    /// Row-major occupancy, `rows * cols` values in `[0, 100]`.
    pub occupancy: &'a [i32],
    /// Row count.
    pub rows: i32,
    /// Column count.
    pub cols: i32,
    /// Start point.
    pub start: Point,
    /// Goal point.
    pub goal: Point,
    /// Cells with occupancy `>= block_threshold` are impassable.
    pub block_threshold: i32,
    /// 8-connected with the octile heuristic when set, 4-connected with
    /// Manhattan otherwise.
    pub allow_diagonal: bool,
}

/// Plan `request` and return the path as points, start first.
///
/// A request whose start equals its goal yields an empty path.
pub fn plan_points(request: &BoundaryRequest<'_>) -> Result<Vec<Point>, PlanError> {
    let grid = Grid::from_signed(request.rows, request.cols, request.occupancy)?;
    let config = SearchConfig::for_boundary(request.allow_diagonal, request.block_threshold);
    let start = Cell::from(request.start);
    let goal = Cell::from(request.goal);

    let result = plan(&grid, start, goal, &config)?;
    if start == goal {
        return Ok(Vec::new());
    }
    Ok(result.path.into_iter().map(Point::from).collect())
}

/// What [`write_points`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteReport {
    /// No buffer was supplied; the caller learns the required length.
    Queried {
        /// Points in the full path.
        needed: usize,
    },
    /// Points were copied into the caller's buffer.
    Written {
        /// Points copied.
        written: usize,
        /// Points in the full path.
        needed: usize,
    },
}

impl WriteReport {
    /// Value the caller's length field should receive: the required
    /// length for a query, the number of points copied otherwise.
    pub fn reported_len(&self) -> usize {
        match *self {
            Self::Queried { needed } => needed,
            Self::Written { written, .. } => written,
        }
    }

    /// `true` when only a prefix of the path fit.
    pub fn is_truncated(&self) -> bool {
        matches!(*self, Self::Written { written, needed } if written < needed)
    }
}

/// Copy `path` into `out`, or report its length when `out` is `None` or
/// empty.
///
/// When the buffer is shorter than the path the leading points are
/// written and the report says so; this is not an error.
pub fn write_points<T: From<Point>>(path: &[Point], out: Option<&mut [T]>) -> WriteReport {
    let needed = path.len();
    let Some(out) = out.filter(|o| !o.is_empty()) else {
        return WriteReport::Queried { needed };
    };
    let written = needed.min(out.len());
    for (slot, &p) in out.iter_mut().zip(&path[..written]) {
        *slot = T::from(p);
    }
    if written < needed {
        warn!(written, needed, "{TRUNCATED_MESSAGE}");
    }
    WriteReport::Written { written, needed }
}

/// Copy `message` into `buf` as a NUL-terminated string, cutting it short
/// if needed. Returns the number of message bytes copied. An empty `buf`
/// receives nothing.
pub fn write_diagnostic(buf: &mut [u8], message: &str) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let bytes = message.as_bytes();
    let n = bytes.len().min(room);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf[n] = 0;
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wayfind_core::{Endpoint, GridError, PlanStatus};

    fn request(occupancy: &[i32], rows: i32, cols: i32) -> BoundaryRequest<'_> {
        BoundaryRequest {
            occupancy,
            rows,
            cols,
            start: Point::new(0, 0),
            goal: Point::new(cols - 1, rows - 1),
            block_threshold: 50,
            allow_diagonal: false,
        }
    }

    #[test]
    fn points_are_x_y() {
        let occ = [0; 15];
        let mut req = request(&occ, 3, 5);
        req.goal = Point::new(4, 0);
        let path = plan_points(&req).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 0)));
        assert!(path.iter().all(|p| p.y == 0));
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let occ = [0; 4];
        let mut req = request(&occ, 2, 2);
        req.goal = req.start;
        assert_eq!(plan_points(&req), Ok(vec![]));
    }

    #[test]
    fn start_equals_goal_still_validates() {
        let occ = [100, 0, 0, 0];
        let mut req = request(&occ, 2, 2);
        req.goal = req.start;
        assert_eq!(plan_points(&req).unwrap_err().status(), PlanStatus::InvalidArg);
    }

    #[test]
    fn bad_values_are_map_errors() {
        let occ = [0, -1, 0, 0];
        let e = plan_points(&request(&occ, 2, 2)).unwrap_err();
        assert_eq!(
            e,
            PlanError::MapError(GridError::ValueOutOfRange { index: 1, value: -1 })
        );

        let occ = [0, 0, 0, 0];
        let e = plan_points(&request(&occ, 0, 4)).unwrap_err();
        assert_eq!(e.status(), PlanStatus::MapError);
    }

    #[test]
    fn out_of_bounds_names_endpoint() {
        let occ = [0; 4];
        let mut req = request(&occ, 2, 2);
        req.goal = Point::new(2, 0);
        match plan_points(&req).unwrap_err() {
            PlanError::OutOfBounds { endpoint, cell, .. } => {
                assert_eq!(endpoint, Endpoint::Goal);
                assert_eq!(cell, Cell::new(0, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn query_reports_needed() {
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let r = write_points::<Point>(&path, None);
        assert_eq!(r, WriteReport::Queried { needed: 3 });
        assert_eq!(r.reported_len(), 3);

        let mut empty: [Point; 0] = [];
        let r = write_points(&path, Some(&mut empty[..]));
        assert_eq!(r.reported_len(), 3);
        assert!(!r.is_truncated());
    }

    #[test]
    fn full_write() {
        let path = [Point::new(0, 0), Point::new(1, 1)];
        let mut out = [Point::default(); 4];
        let r = write_points(&path, Some(&mut out[..]));
        assert_eq!(r, WriteReport::Written { written: 2, needed: 2 });
        assert_eq!(&out[..2], &path);
        assert_eq!(out[2], Point::default());
    }

    #[test]
    fn truncated_write_keeps_prefix() {
        let path: Vec<Point> = (0..6).map(|x| Point::new(x, 0)).collect();
        let mut out = [Point::default(); 3];
        let r = write_points(&path, Some(&mut out[..]));
        assert!(r.is_truncated());
        assert_eq!(r.reported_len(), 3);
        assert_eq!(&out[..], &path[..3]);
    }

    #[test]
    fn diagnostic_is_bounded() {
        let mut buf = [0xffu8; 6];
        assert_eq!(write_diagnostic(&mut buf, "no path here"), 5);
        assert_eq!(&buf, b"no pa\0");

        let mut buf = [0xffu8; 16];
        assert_eq!(write_diagnostic(&mut buf, "ok"), 2);
        assert_eq!(&buf[..3], b"ok\0");

        let mut one = [0xffu8; 1];
        assert_eq!(write_diagnostic(&mut one, "anything"), 0);
        assert_eq!(one, [0]);

        assert_eq!(write_diagnostic(&mut [], "anything"), 0);
    }

    proptest! {
        #[test]
        fn write_reports_are_consistent(len in 0usize..40, cap in 0usize..40) {
            let path: Vec<Point> = (0..len as i32).map(|i| Point::new(i, 0)).collect();
            let mut out = vec![Point::new(-1, -1); cap];
            let r = write_points(&path, Some(&mut out[..]));
            if cap == 0 {
                prop_assert_eq!(r.reported_len(), len);
            } else {
                prop_assert_eq!(r.reported_len(), len.min(cap));
                prop_assert_eq!(r.is_truncated(), cap < len);
                prop_assert_eq!(&out[..r.reported_len()], &path[..r.reported_len()]);
            }
        }
    }
}
