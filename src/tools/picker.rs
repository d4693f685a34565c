use super::{Tool, ToolContext, ToolKind};
use crate::command::Edit;
use crate::geometry::GridPos;

/// Copies the colour under the pointer into the active colour. Unpainted
/// cells leave it unchanged.
#[derive(Debug, Clone, Default)]
pub struct PickerTool;

impl Tool for PickerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Picker
    }

    fn records_history(&self) -> bool {
        false
    }

    fn on_pointer_down(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        ctx.document.grid.get(cell.x, cell.y).map(Edit::PickColor)
    }

    fn on_pointer_move(&mut self, _cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        None
    }

    fn on_pointer_up(&mut self, _cell: GridPos, _ctx: &ToolContext<'_>) -> Option<Edit> {
        None
    }

    fn cancel(&mut self) {}

    fn preview(&self) -> &[GridPos] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::document::Document;
    use crate::tools::ToolSettings;

    #[test]
    fn picks_painted_cells_only() {
        let mut document = Document::new(2, 1);
        let color = Rgba::new(9, 8, 7, 0.4);
        document.grid.set(0, 0, Some(color));
        let settings = ToolSettings::default();
        let ctx = ToolContext::new(&document, &settings);

        assert_eq!(PickerTool.on_pointer_down(GridPos::new(0, 0), &ctx), Some(Edit::PickColor(color)));
        assert_eq!(PickerTool.on_pointer_down(GridPos::new(1, 0), &ctx), None);
    }
}
