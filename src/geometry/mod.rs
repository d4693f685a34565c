pub mod raster;
pub mod surface;

pub use raster::{circle, line, quadratic_curve, rect_filled, rect_outline, Coord, CURVE_SAMPLES, MAX_RECT_SPAN};
pub use surface::surface_to_cell;

use serde::{Deserialize, Serialize};

/// An integer cell coordinate. `(0, 0)` is the top-left cell.
///
/// Rasterizer output is not bounds-checked, so coordinates may be negative or
/// past the grid edge; the grid drops those on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded half-up, used as a circle radius.
    pub fn rounded_distance(self, other: GridPos) -> i32 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        raster::round_half_up(dx.hypot(dy)).unwrap_or(0)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
