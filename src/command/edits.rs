use crate::color::Rgba;
use crate::document::Document;
use crate::geometry::GridPos;
use crate::grid::Pixel;

/// What an edit may touch when it runs.
pub struct EditContext<'a> {
    pub document: &'a mut Document,
    pub active_color: &'a mut Rgba,
}

/// A change produced by a tool in response to pointer input.
///
/// Tools never mutate the document themselves; they return an `Edit` and the
/// editor runs it.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Write `pixel` into every listed cell. `None` erases.
    Paint { cells: Vec<GridPos>, pixel: Pixel },
    /// Start a new accent stroke at `start`.
    BeginOverlay { start: GridPos, color: Rgba, width: f32 },
    /// Append a point to the accent stroke in progress.
    ExtendOverlay(GridPos),
    /// Make `color` the active drawing colour.
    PickColor(Rgba),
}

impl Edit {
    /// Applies the edit. Returns whether anything changed.
    pub fn execute(&self, ctx: &mut EditContext<'_>) -> bool {
        match self {
            Edit::Paint { cells, pixel } => ctx.document.grid.paint(cells, *pixel) > 0,
            Edit::BeginOverlay { start, color, width } => {
                ctx.document.overlay.begin_stroke(*start, *color, *width);
                true
            }
            Edit::ExtendOverlay(point) => ctx.document.overlay.extend_current_stroke(*point),
            Edit::PickColor(color) => {
                let changed = *ctx.active_color != *color;
                *ctx.active_color = *color;
                changed
            }
        }
    }

    pub fn touches_document(&self) -> bool {
        !matches!(self, Edit::PickColor(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_and_erase() {
        let mut document = Document::new(3, 3);
        let mut color = Rgba::BLACK;
        let cells = vec![GridPos::new(0, 0), GridPos::new(9, 9)];

        let mut ctx = EditContext { document: &mut document, active_color: &mut color };
        assert!(Edit::Paint { cells: cells.clone(), pixel: Some(Rgba::WHITE) }.execute(&mut ctx));
        assert_eq!(ctx.document.grid.get(0, 0), Some(Rgba::WHITE));
        assert!(Edit::Paint { cells, pixel: None }.execute(&mut ctx));
        assert!(ctx.document.grid.is_blank());
    }

    #[test]
    fn overlay_edits() {
        let mut document = Document::new(3, 3);
        let mut color = Rgba::BLACK;
        let mut ctx = EditContext { document: &mut document, active_color: &mut color };

        assert!(!Edit::ExtendOverlay(GridPos::new(1, 1)).execute(&mut ctx));
        Edit::BeginOverlay { start: GridPos::new(0, 0), color: Rgba::WHITE, width: 3.0 }.execute(&mut ctx);
        assert!(Edit::ExtendOverlay(GridPos::new(1, 1)).execute(&mut ctx));
        assert_eq!(document.overlay.paths()[0].points.len(), 2);
    }

    #[test]
    fn pick_sets_active_color() {
        let mut document = Document::new(1, 1);
        let mut color = Rgba::BLACK;
        let picked = Rgba::new(10, 20, 30, 0.5);
        let edit = Edit::PickColor(picked);
        assert!(!edit.touches_document());
        edit.execute(&mut EditContext { document: &mut document, active_color: &mut color });
        assert_eq!(color, picked);
    }
}
