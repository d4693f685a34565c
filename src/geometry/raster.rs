//! Shape rasterization on the integer cell grid.
//!
//! Every function here is pure: it takes coordinates and returns cells, never
//! touching a grid or document. Inputs that cannot be turned into a cell
//! coordinate (NaN, infinities, values outside `i32`) yield an empty result.

use super::GridPos;
use std::collections::HashSet;

/// Fixed sample count for quadratic curves. Dense enough that consecutive
/// samples never skip a cell on any grid the editor allows.
pub const CURVE_SAMPLES: u32 = 200;

/// A value that may be coerced to a cell coordinate.
pub trait Coord: Copy {
    fn to_cell(self) -> Option<i32>;
}

impl Coord for i32 {
    fn to_cell(self) -> Option<i32> {
        Some(self)
    }
}

impl Coord for i64 {
    fn to_cell(self) -> Option<i32> {
        i32::try_from(self).ok()
    }
}

impl Coord for f64 {
    fn to_cell(self) -> Option<i32> {
        round_half_up(self)
    }
}

impl Coord for f32 {
    fn to_cell(self) -> Option<i32> {
        round_half_up(f64::from(self))
    }
}

/// Rounds `.5` towards positive infinity, so `-0.5` becomes `0`.
pub(crate) fn round_half_up(v: f64) -> Option<i32> {
    if !v.is_finite() {
        return None;
    }
    let r = (v + 0.5).floor();
    if r < f64::from(i32::MIN) || r > f64::from(i32::MAX) {
        return None;
    }
    Some(r as i32)
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included,
/// 8-connected, ordered from start to end.
///
/// The cells visited do not depend on direction: the walk always runs from
/// the lexicographically smaller endpoint and is reversed afterwards if needed.
pub fn line(x0: impl Coord, y0: impl Coord, x1: impl Coord, y1: impl Coord) -> Vec<GridPos> {
    let (Some(x0), Some(y0), Some(x1), Some(y1)) =
        (x0.to_cell(), y0.to_cell(), x1.to_cell(), y1.to_cell())
    else {
        return Vec::new();
    };

    let start = GridPos::new(x0, y0);
    let end = GridPos::new(x1, y1);
    if start <= end {
        bresenham(start, end)
    } else {
        let mut points = bresenham(end, start);
        points.reverse();
        points
    }
}

fn bresenham(start: GridPos, end: GridPos) -> Vec<GridPos> {
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push(GridPos::new(x as i32, y as i32));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Midpoint circle outline centred on `(cx, cy)`. Duplicates are removed;
/// order is unspecified. A negative radius gives nothing, zero gives the
/// centre cell only.
pub fn circle(cx: impl Coord, cy: impl Coord, r: impl Coord) -> Vec<GridPos> {
    let (Some(cx), Some(cy), Some(r)) = (cx.to_cell(), cy.to_cell(), r.to_cell()) else {
        return Vec::new();
    };
    if r < 0 {
        return Vec::new();
    }

    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mut seen = HashSet::new();
    let mut points = Vec::new();
    let mut push = |px: i64, py: i64| {
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            let p = GridPos::new(px, py);
            if seen.insert(p) {
                points.push(p);
            }
        }
    };

    let (mut x, mut y, mut err) = (i64::from(r), 0_i64, 0_i64);
    while x >= y {
        for (ox, oy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            push(cx + ox, cy + oy);
        }
        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
    points
}

struct Bounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

/// Widest box, in cells per axis, the rectangle rasterizers will emit.
pub const MAX_RECT_SPAN: i64 = 1 << 16;

fn bounds(x0: impl Coord, y0: impl Coord, x1: impl Coord, y1: impl Coord) -> Option<Bounds> {
    let (x0, y0, x1, y1) = (x0.to_cell()?, y0.to_cell()?, x1.to_cell()?, y1.to_cell()?);
    let b = Bounds {
        min_x: x0.min(x1),
        max_x: x0.max(x1),
        min_y: y0.min(y1),
        max_y: y0.max(y1),
    };
    let fits = span(b.min_x, b.max_x) <= MAX_RECT_SPAN && span(b.min_y, b.max_y) <= MAX_RECT_SPAN;
    fits.then_some(b)
}

fn span(min: i32, max: i32) -> i64 {
    i64::from(max) - i64::from(min) + 1
}

/// Border cells of the box spanned by two corners, each cell once. Boxes
/// wider than [`MAX_RECT_SPAN`] on either axis yield nothing.
pub fn rect_outline(x0: impl Coord, y0: impl Coord, x1: impl Coord, y1: impl Coord) -> Vec<GridPos> {
    let Some(b) = bounds(x0, y0, x1, y1) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for x in b.min_x..=b.max_x {
        points.push(GridPos::new(x, b.min_y));
    }
    if b.max_y != b.min_y {
        for x in b.min_x..=b.max_x {
            points.push(GridPos::new(x, b.max_y));
        }
    }
    // Side columns without the corners already emitted above.
    if span(b.min_y, b.max_y) > 2 {
        for y in b.min_y + 1..b.max_y {
            points.push(GridPos::new(b.min_x, y));
            if b.max_x != b.min_x {
                points.push(GridPos::new(b.max_x, y));
            }
        }
    }
    points
}

/// Every cell inside the box spanned by two corners, row by row. Boxes wider
/// than [`MAX_RECT_SPAN`] on either axis yield nothing.
pub fn rect_filled(x0: impl Coord, y0: impl Coord, x1: impl Coord, y1: impl Coord) -> Vec<GridPos> {
    let Some(b) = bounds(x0, y0, x1, y1) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for y in b.min_y..=b.max_y {
        for x in b.min_x..=b.max_x {
            points.push(GridPos::new(x, y));
        }
    }
    points
}

/// Quadratic Bézier from `(x0, y0)` through control `(cx, cy)` to `(x1, y1)`,
/// sampled [`CURVE_SAMPLES`] times. Consecutive samples landing in the same
/// cell are collapsed to one.
pub fn quadratic_curve(
    x0: impl Coord,
    y0: impl Coord,
    cx: impl Coord,
    cy: impl Coord,
    x1: impl Coord,
    y1: impl Coord,
) -> Vec<GridPos> {
    let coords = [
        x0.to_cell(),
        y0.to_cell(),
        cx.to_cell(),
        cy.to_cell(),
        x1.to_cell(),
        y1.to_cell(),
    ];
    let [Some(x0), Some(y0), Some(cx), Some(cy), Some(x1), Some(y1)] = coords.map(|c| c.map(f64::from))
    else {
        return Vec::new();
    };

    let mut points: Vec<GridPos> = Vec::new();
    for i in 0..=CURVE_SAMPLES {
        let t = f64::from(i) / f64::from(CURVE_SAMPLES);
        let mt = 1.0 - t;
        let x = mt * mt * x0 + 2.0 * mt * t * cx + t * t * x1;
        let y = mt * mt * y0 + 2.0 * mt * t * cy + t * t * y1;
        let (Some(ix), Some(iy)) = (round_half_up(x), round_half_up(y)) else {
            continue;
        };
        let cell = GridPos::new(ix, iy);
        if points.last() != Some(&cell) {
            points.push(cell);
        }
    }
    points
}
