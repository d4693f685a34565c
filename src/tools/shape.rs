use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::{GridPos, circle, line, rect_filled, rect_outline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Circle,
}

impl ShapeKind {
    /// Cells covered by the shape dragged from `anchor` to `cell`.
    ///
    /// Circles are centred on the anchor with the rounded distance as radius
    /// and ignore `fill`.
    pub fn rasterize(self, anchor: GridPos, cell: GridPos, fill: bool) -> Vec<GridPos> {
        match self {
            ShapeKind::Line => line(anchor.x, anchor.y, cell.x, cell.y),
            ShapeKind::Rect if fill => rect_filled(anchor.x, anchor.y, cell.x, cell.y),
            ShapeKind::Rect => rect_outline(anchor.x, anchor.y, cell.x, cell.y),
            ShapeKind::Circle => circle(anchor.x, anchor.y, anchor.rounded_distance(cell)),
        }
    }
}

/// Drag-to-draw line, rectangle and circle. The shape is previewed while
/// dragging and committed on release.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    shape: ShapeKind,
    anchor: Option<GridPos>,
    preview: Vec<GridPos>,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            anchor: None,
            preview: Vec::new(),
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        match self.shape {
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Rect => ToolKind::Rect,
            ShapeKind::Circle => ToolKind::Circle,
        }
    }

    fn on_pointer_down(&mut self, cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.anchor = Some(cell);
        self.preview.clear();
        None
    }

    fn on_pointer_move(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        if let Some(anchor) = self.anchor {
            self.preview = self.shape.rasterize(anchor, cell, ctx.settings.fill_shapes);
        }
        None
    }

    fn on_pointer_up(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        let anchor = self.anchor.take()?;
        self.preview.clear();
        Some(Edit::Paint {
            cells: self.shape.rasterize(anchor, cell, ctx.settings.fill_shapes),
            pixel: Some(ctx.settings.color),
        })
    }

    fn cancel(&mut self) {
        self.anchor = None;
        self.preview.clear();
    }

    fn preview(&self) -> &[GridPos] {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::tools::ToolSettings;

    fn drag(tool: &mut ShapeTool, from: GridPos, to: GridPos, settings: &ToolSettings) -> Option<Edit> {
        let document = Document::new(16, 16);
        let ctx = ToolContext::new(&document, settings);
        tool.on_pointer_down(from, &ctx);
        tool.on_pointer_move(to, &ctx);
        tool.on_pointer_up(to, &ctx)
    }

    #[test]
    fn rect_respects_fill() {
        let mut settings = ToolSettings::default();
        let mut tool = ShapeTool::new(ShapeKind::Rect);
        let Some(Edit::Paint { cells, .. }) = drag(&mut tool, GridPos::new(0, 0), GridPos::new(2, 2), &settings)
        else {
            panic!("expected paint");
        };
        assert_eq!(cells.len(), 8);

        settings.fill_shapes = true;
        let Some(Edit::Paint { cells, .. }) = drag(&mut tool, GridPos::new(0, 0), GridPos::new(2, 2), &settings)
        else {
            panic!("expected paint");
        };
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn circle_radius_is_rounded_distance() {
        let cells = ShapeKind::Circle.rasterize(GridPos::new(5, 5), GridPos::new(7, 6), true);
        // hypot(2, 1) = 2.236 rounds to 2
        let mut expected = circle(5, 5, 2);
        let mut cells = cells;
        cells.sort();
        expected.sort();
        assert_eq!(cells, expected);
    }

    #[test]
    fn preview_tracks_drag() {
        let document = Document::new(16, 16);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut tool = ShapeTool::new(ShapeKind::Line);

        tool.on_pointer_down(GridPos::new(0, 0), &ctx);
        tool.on_pointer_move(GridPos::new(3, 0), &ctx);
        assert_eq!(tool.preview(), line(0, 0, 3, 0).as_slice());
        tool.cancel();
        assert!(tool.preview().is_empty());
        assert!(tool.on_pointer_up(GridPos::new(3, 0), &ctx).is_none());
    }
}
