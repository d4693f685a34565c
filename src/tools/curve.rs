use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::{GridPos, line, quadratic_curve};

/// Points collected so far for the next curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurveAnchors {
    #[default]
    Empty,
    Start(GridPos),
    StartAndControl { start: GridPos, control: GridPos },
}

/// Three-click quadratic curve: start point, control point, end point.
///
/// Anchors are placed on release and persist across gestures; a cancelled
/// gesture keeps them, switching tools drops them.
#[derive(Debug, Clone, Default)]
pub struct CurveTool {
    anchors: CurveAnchors,
    preview: Vec<GridPos>,
}

impl CurveTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchors(&self) -> CurveAnchors {
        self.anchors
    }
}

impl Tool for CurveTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Curve
    }

    fn on_pointer_down(&mut self, _cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        None
    }

    fn on_pointer_move(&mut self, cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.preview = match self.anchors {
            CurveAnchors::Empty => Vec::new(),
            CurveAnchors::Start(start) => line(start.x, start.y, cell.x, cell.y),
            CurveAnchors::StartAndControl { start, control } => {
                quadratic_curve(start.x, start.y, control.x, control.y, cell.x, cell.y)
            }
        };
        None
    }

    fn on_pointer_up(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        self.preview.clear();
        match self.anchors {
            CurveAnchors::Empty => {
                self.anchors = CurveAnchors::Start(cell);
                None
            }
            CurveAnchors::Start(start) => {
                self.anchors = CurveAnchors::StartAndControl { start, control: cell };
                None
            }
            CurveAnchors::StartAndControl { start, control } => {
                self.anchors = CurveAnchors::Empty;
                Some(Edit::Paint {
                    cells: quadratic_curve(start.x, start.y, control.x, control.y, cell.x, cell.y),
                    pixel: Some(ctx.settings.color),
                })
            }
        }
    }

    fn cancel(&mut self) {
        self.preview.clear();
    }

    fn reset(&mut self) {
        self.anchors = CurveAnchors::Empty;
        self.preview.clear();
    }

    fn preview(&self) -> &[GridPos] {
        &self.preview
    }
}
