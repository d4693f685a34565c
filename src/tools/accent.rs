use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::GridPos;

/// Freehand overlay strokes drawn on top of the pixels.
#[derive(Debug, Clone, Default)]
pub struct AccentTool {
    drawing: bool,
}

impl AccentTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for AccentTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Accent
    }

    fn on_pointer_down(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        self.drawing = true;
        Some(Edit::BeginOverlay {
            start: cell,
            color: ctx.settings.color,
            width: ctx.settings.accent_width,
        })
    }

    fn on_pointer_move(&mut self, cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.drawing.then_some(Edit::ExtendOverlay(cell))
    }

    fn on_pointer_up(&mut self, _cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.drawing = false;
        None
    }

    fn cancel(&mut self) {
        self.drawing = false;
    }

    fn preview(&self) -> &[GridPos] {
        &[]
    }
}
