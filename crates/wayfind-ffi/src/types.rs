//! C-compatible value types.

use wayfind_core::Point;

/// A path point in caller coordinates: `x` is the column, `y` the row.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WayfindPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl From<Point> for WayfindPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<WayfindPoint> for Point {
    fn from(p: WayfindPoint) -> Self {
        Point::new(p.x, p.y)
    }
}
