use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::{GridPos, line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreehandMode {
    Pencil,
    Eraser,
}

/// Continuous drawing that connects successive pointer cells with lines, so
/// fast movement leaves no gaps. The pencil writes the active colour, the
/// eraser clears.
#[derive(Debug, Clone)]
pub struct FreehandTool {
    mode: FreehandMode,
    last: Option<GridPos>,
}

impl FreehandTool {
    pub fn new(mode: FreehandMode) -> Self {
        Self { mode, last: None }
    }

    pub fn mode(&self) -> FreehandMode {
        self.mode
    }

    fn paint(&self, cells: Vec<GridPos>, ctx: &ToolContext<'_>) -> Edit {
        let pixel = match self.mode {
            FreehandMode::Pencil => Some(ctx.settings.color),
            FreehandMode::Eraser => None,
        };
        Edit::Paint { cells, pixel }
    }
}

impl Tool for FreehandTool {
    fn kind(&self) -> ToolKind {
        match self.mode {
            FreehandMode::Pencil => ToolKind::Pencil,
            FreehandMode::Eraser => ToolKind::Eraser,
        }
    }

    fn on_pointer_down(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        self.last = Some(cell);
        Some(self.paint(vec![cell], ctx))
    }

    fn on_pointer_move(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        let last = self.last?;
        if last == cell {
            return None;
        }
        self.last = Some(cell);
        Some(self.paint(line(last.x, last.y, cell.x, cell.y), ctx))
    }

    fn on_pointer_up(&mut self, _cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.last = None;
        None
    }

    fn cancel(&mut self) {
        self.last = None;
    }

    fn preview(&self) -> &[GridPos] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::tools::ToolSettings;

    #[test]
    fn fills_gaps_between_moves() {
        let document = Document::new(8, 8);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut pencil = FreehandTool::new(FreehandMode::Pencil);

        pencil.on_pointer_down(GridPos::new(0, 0), &ctx);
        let Some(Edit::Paint { cells, .. }) = pencil.on_pointer_move(GridPos::new(3, 0), &ctx) else {
            panic!("expected a paint edit");
        };
        assert_eq!(cells, line(0, 0, 3, 0));
    }

    #[test]
    fn same_cell_move_is_skipped() {
        let document = Document::new(8, 8);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut pencil = FreehandTool::new(FreehandMode::Pencil);

        pencil.on_pointer_down(GridPos::new(2, 2), &ctx);
        assert!(pencil.on_pointer_move(GridPos::new(2, 2), &ctx).is_none());
    }

    #[test]
    fn eraser_clears() {
        let document = Document::new(2, 2);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut eraser = FreehandTool::new(FreehandMode::Eraser);

        let edit = eraser.on_pointer_down(GridPos::new(1, 1), &ctx);
        assert_eq!(edit, Some(Edit::Paint { cells: vec![GridPos::new(1, 1)], pixel: None }));
        assert_eq!(eraser.kind(), ToolKind::Eraser);
    }

    #[test]
    fn move_without_down_does_nothing() {
        let document = Document::new(2, 2);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut pencil = FreehandTool::new(FreehandMode::Pencil);
        assert!(pencil.on_pointer_move(GridPos::new(1, 1), &ctx).is_none());
    }
}
