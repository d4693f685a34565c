use crate::geometry::surface_to_cell;
use crate::state::Editor;
use egui::Vec2;

use super::InputEvent;

/// Maps a surface event onto the grid and hands it to the editor.
///
/// `surface` is the rendered size of the drawing surface, which is what makes
/// the mapping zoom-independent. Returns whether the editor accepted the event.
pub fn route_event(event: &InputEvent, editor: &mut Editor, surface: Vec2) -> bool {
    let (width, height) = (editor.document().width(), editor.document().height());
    let to_cell = |position| surface_to_cell(position, surface, width, height);

    match *event {
        InputEvent::PointerDown { pointer_id, position } => editor.pointer_down(pointer_id, to_cell(position)),
        InputEvent::PointerMove { pointer_id, position } => editor.pointer_move(pointer_id, to_cell(position)),
        InputEvent::PointerUp { pointer_id, position } => editor.pointer_up(pointer_id, to_cell(position)),
        InputEvent::PointerCancel { pointer_id } => editor.pointer_cancel(pointer_id),
        InputEvent::PointerLeave { pointer_id } => editor.pointer_leave(pointer_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolKind;
    use egui::{pos2, vec2};

    #[test]
    fn routes_through_cell_mapping() {
        let mut editor = Editor::with_size(10, 10);
        editor.select_tool(ToolKind::Pencil);
        let surface = vec2(400.0, 400.0);

        assert!(route_event(&InputEvent::PointerDown { pointer_id: 1, position: pos2(45.0, 79.9) }, &mut editor, surface));
        assert!(route_event(&InputEvent::PointerUp { pointer_id: 1, position: pos2(45.0, 79.9) }, &mut editor, surface));
        assert!(editor.document().grid.get(1, 1).is_some());
    }
}
