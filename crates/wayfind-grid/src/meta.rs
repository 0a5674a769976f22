//! World-coordinate metadata.
//!
//! Maps cells to metric positions for callers that plan in cells but act
//! in the world. The planner never reads it. Row index grows along +y.

use wayfind_core::Cell;

/// Resolution and origin of a grid in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapMeta {
    resolution: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Default for MapMeta {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl MapMeta {
    /// Create metadata. Returns `None` unless `resolution` is finite and
    /// positive and the origin is finite.
    pub fn new(resolution: f64, origin_x: f64, origin_y: f64) -> Option<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return None;
        }
        if !(origin_x.is_finite() && origin_y.is_finite()) {
            return None;
        }
        Some(Self {
            resolution,
            origin_x,
            origin_y,
        })
    }

    /// Cell edge length in world units.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// World position of cell `(0, 0)`'s corner.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// World position of `cell`'s centre.
    pub fn cell_to_world(&self, cell: Cell) -> (f64, f64) {
        (
            self.origin_x + (f64::from(cell.col) + 0.5) * self.resolution,
            self.origin_y + (f64::from(cell.row) + 0.5) * self.resolution,
        )
    }

    /// Cell containing world position `(x, y)`. The result may be out of
    /// bounds for any particular grid.
    pub fn world_to_cell(&self, x: f64, y: f64) -> Cell {
        let col = ((x - self.origin_x) / self.resolution).floor();
        let row = ((y - self.origin_y) / self.resolution).floor();
        Cell::new(row as i32, col as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_resolution() {
        assert!(MapMeta::new(0.0, 0.0, 0.0).is_none());
        assert!(MapMeta::new(-0.5, 0.0, 0.0).is_none());
        assert!(MapMeta::new(f64::NAN, 0.0, 0.0).is_none());
        assert!(MapMeta::new(0.05, f64::INFINITY, 0.0).is_none());
    }

    #[test]
    fn cell_centre() {
        let m = MapMeta::new(0.5, -1.0, 2.0).unwrap();
        assert_eq!(m.cell_to_world(Cell::new(0, 0)), (-0.75, 2.25));
        assert_eq!(m.cell_to_world(Cell::new(2, 4)), (1.25, 3.25));
    }

    #[test]
    fn world_to_cell_inverts_centre() {
        let m = MapMeta::new(0.05, 10.0, -3.0).unwrap();
        for &(r, c) in &[(0, 0), (7, 3), (120, 44)] {
            let cell = Cell::new(r, c);
            let (x, y) = m.cell_to_world(cell);
            assert_eq!(m.world_to_cell(x, y), cell);
        }
    }

    #[test]
    fn world_to_cell_below_origin_is_negative() {
        let m = MapMeta::default();
        assert_eq!(m.world_to_cell(-0.1, -0.1), Cell::new(-1, -1));
    }

    #[test]
    fn grid_carries_meta() {
        let g = crate::Grid::free(2, 2)
            .unwrap()
            .with_meta(MapMeta::new(0.1, 0.0, 0.0).unwrap());
        assert_eq!(g.meta().map(|m| m.resolution()), Some(0.1));
    }
}
