use super::GridPos;
use egui::{Pos2, Vec2};

/// Maps a pointer position, relative to the top-left of the rendered drawing
/// surface, to the grid cell under it.
///
/// The surface may be zoomed, so cell size is derived from the rendered size
/// rather than a fixed scale. The result is always clamped onto the grid.
pub fn surface_to_cell(pos: Pos2, surface: Vec2, grid_width: usize, grid_height: usize) -> GridPos {
    GridPos::new(
        axis_to_cell(pos.x, surface.x, grid_width),
        axis_to_cell(pos.y, surface.y, grid_height),
    )
}

fn axis_to_cell(relative: f32, surface_len: f32, cells: usize) -> i32 {
    let cells = cells.max(1);
    let max = i32::try_from(cells - 1).unwrap_or(i32::MAX);
    // A collapsed or unmeasured surface falls back to one unit per cell.
    let cell_len = if surface_len.is_finite() && surface_len > 0.0 {
        surface_len / cells as f32
    } else {
        1.0
    };
    let raw = (relative / cell_len).floor();
    if raw.is_nan() {
        return 0;
    }
    // `as` saturates for out-of-range floats.
    (raw as i32).clamp(0, max)
}
