use crate::color::Rgba;
use crate::geometry::GridPos;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand accent stroke drawn over the pixel grid.
///
/// Points are cell coordinates; renderers draw through cell centres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOverlayPath")]
pub struct OverlayPath {
    pub id: String,
    pub points: Vec<GridPos>,
    pub color: Rgba,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("stroke width {0} must be positive")]
pub struct InvalidWidth(pub f32);

#[derive(Deserialize)]
struct RawOverlayPath {
    #[serde(default = "new_path_id")]
    id: String,
    points: Vec<GridPos>,
    color: Rgba,
    #[serde(default = "default_width")]
    width: f32,
}

impl TryFrom<RawOverlayPath> for OverlayPath {
    type Error = InvalidWidth;

    fn try_from(raw: RawOverlayPath) -> Result<Self, Self::Error> {
        if !(raw.width.is_finite() && raw.width > 0.0) {
            return Err(InvalidWidth(raw.width));
        }
        Ok(Self {
            id: raw.id,
            points: raw.points,
            color: raw.color,
            width: raw.width,
        })
    }
}

fn new_path_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_width() -> f32 {
    1.0
}

impl OverlayPath {
    pub fn new(start: GridPos, color: Rgba, width: f32) -> Self {
        Self {
            id: new_path_id(),
            points: vec![start],
            color,
            width: sanitize_width(width),
        }
    }

    /// Width the renderers should use; non-positive widths draw as 1.
    pub fn stroke_width(&self) -> f32 {
        sanitize_width(self.width)
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 { width } else { default_width() }
}

/// Ordered overlay strokes plus the one currently being drawn, if any.
///
/// Only the most recently begun stroke can grow, and only until
/// [`OverlayStore::end_stroke`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayStore {
    paths: Vec<OverlayPath>,
    #[serde(skip)]
    open: bool,
}

impl PartialEq for OverlayStore {
    fn eq(&self, other: &Self) -> bool {
        // The open flag is gesture state, not content.
        self.paths == other.paths
    }
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paths(paths: Vec<OverlayPath>) -> Self {
        Self { paths, open: false }
    }

    /// Appends a new single-point stroke and makes it current.
    pub fn begin_stroke(&mut self, start: GridPos, color: Rgba, width: f32) -> &OverlayPath {
        self.paths.push(OverlayPath::new(start, color, width));
        self.open = true;
        let index = self.paths.len() - 1;
        &self.paths[index]
    }

    /// Appends to the current stroke. Does nothing when no stroke is open.
    pub fn extend_current_stroke(&mut self, point: GridPos) -> bool {
        if !self.open {
            return false;
        }
        match self.paths.last_mut() {
            Some(path) => {
                path.points.push(point);
                true
            }
            None => false,
        }
    }

    pub fn end_stroke(&mut self) {
        self.open = false;
    }

    pub fn is_stroke_open(&self) -> bool {
        self.open
    }

    pub fn paths(&self) -> &[OverlayPath] {
        &self.paths
    }

    pub fn current(&self) -> Option<&OverlayPath> {
        if self.open { self.paths.last() } else { None }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_without_open_stroke_is_noop() {
        let mut store = OverlayStore::new();
        assert!(!store.extend_current_stroke(GridPos::new(1, 1)));
        assert!(store.is_empty());
    }

    #[test]
    fn stroke_grows_until_ended() {
        let mut store = OverlayStore::new();
        store.begin_stroke(GridPos::new(0, 0), Rgba::WHITE, 2.0);
        assert!(store.extend_current_stroke(GridPos::new(1, 0)));
        assert!(store.extend_current_stroke(GridPos::new(2, 1)));
        store.end_stroke();
        assert!(!store.extend_current_stroke(GridPos::new(3, 3)));

        let path = &store.paths()[0];
        assert_eq!(path.points, vec![GridPos::new(0, 0), GridPos::new(1, 0), GridPos::new(2, 1)]);
        assert_eq!(path.width, 2.0);
    }

    #[test]
    fn strokes_get_unique_ids() {
        let mut store = OverlayStore::new();
        let a = store.begin_stroke(GridPos::new(0, 0), Rgba::WHITE, 1.0).id.clone();
        let b = store.begin_stroke(GridPos::new(0, 0), Rgba::WHITE, 1.0).id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn bad_width_is_sanitized() {
        let path = OverlayPath::new(GridPos::new(0, 0), Rgba::WHITE, -3.0);
        assert_eq!(path.stroke_width(), 1.0);
    }

    #[test]
    fn non_positive_width_is_rejected_on_load() {
        let json = r#"{"points":[{"x":0,"y":0}],"color":{"r":0,"g":0,"b":0},"width":0}"#;
        assert!(serde_json::from_str::<OverlayPath>(json).is_err());
        let json = r#"{"points":[{"x":0,"y":0}],"color":{"r":0,"g":0,"b":0}}"#;
        let path: OverlayPath = serde_json::from_str(json).unwrap();
        assert_eq!(path.width, 1.0);
        assert!(!path.id.is_empty());
    }

    #[test]
    fn open_flag_ignored_by_equality() {
        let mut a = OverlayStore::new();
        a.begin_stroke(GridPos::new(0, 0), Rgba::WHITE, 1.0);
        let mut b = a.clone();
        b.end_stroke();
        assert_eq!(a, b);
    }
}
