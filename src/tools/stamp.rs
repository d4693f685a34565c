use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::GridPos;

/// Paints a single cell on release. While the pointer is held the target cell
/// is shown as a preview and can be moved.
#[derive(Debug, Clone, Default)]
pub struct StampTool {
    preview: Vec<GridPos>,
}

impl StampTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for StampTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Stamp
    }

    fn on_pointer_down(&mut self, cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.preview = vec![cell];
        None
    }

    fn on_pointer_move(&mut self, cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        self.preview = vec![cell];
        None
    }

    fn on_pointer_up(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        self.preview.clear();
        Some(Edit::Paint {
            cells: vec![cell],
            pixel: Some(ctx.settings.color),
        })
    }

    fn cancel(&mut self) {
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

    #[test]
    fn paints_on_release_only() {
        let document = Document::new(4, 4);
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);
        let mut tool = StampTool::new();

        assert!(tool.on_pointer_down(GridPos::new(1, 1), &ctx).is_none());
        assert!(tool.on_pointer_move(GridPos::new(2, 1), &ctx).is_none());
        assert_eq!(tool.preview(), &[GridPos::new(2, 1)]);

        let edit = tool.on_pointer_up(GridPos::new(2, 2), &ctx);
        assert_eq!(
            edit,
            Some(Edit::Paint { cells: vec![GridPos::new(2, 2)], pixel: Some(settings.color) })
        );
        assert!(tool.preview().is_empty());
    }
}
