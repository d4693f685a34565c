use pixel_paint::{Command, CommandOutput, Editor, GridPos, ToolKind};

fn paint_line(editor: &mut Editor, y: i32) {
    editor.pointer_down(1, GridPos::new(0, y));
    editor.pointer_move(1, GridPos::new(3, y));
    editor.pointer_up(1, GridPos::new(3, y));
}

#[test]
fn undo_redo_are_inverses() {
    let mut editor = Editor::with_size(4, 4);
    editor.select_tool(ToolKind::Pencil);
    let mut states = vec![editor.document().clone()];
    for y in 0..4 {
        paint_line(&mut editor, y);
        states.push(editor.document().clone());
    }

    for expected in states.iter().rev().skip(1) {
        assert!(editor.undo());
        assert_eq!(editor.document(), expected);
    }
    assert!(!editor.undo());

    for expected in states.iter().skip(1) {
        assert!(editor.redo());
        assert_eq!(editor.document(), expected);
    }
    assert!(!editor.redo());
}

#[test]
fn new_edit_discards_redo() {
    let mut editor = Editor::with_size(4, 4);
    editor.select_tool(ToolKind::Pencil);
    paint_line(&mut editor, 0);
    paint_line(&mut editor, 1);
    assert!(editor.undo());
    assert!(editor.history().can_redo());
    paint_line(&mut editor, 2);
    assert!(!editor.history().can_redo());
    assert_eq!(editor.execute(Command::Redo).unwrap(), CommandOutput::Unchanged);
}

#[test]
fn history_limit_drops_oldest_steps() {
    let mut editor = Editor::with_size(4, 4);
    editor.set_history_limit(Some(2));
    editor.select_tool(ToolKind::Pencil);
    for y in 0..4 {
        paint_line(&mut editor, y);
    }
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    // Rows 0 and 1 are older than the limit and stay painted.
    assert!(editor.document().grid.get(0, 1).is_some());
    assert!(editor.document().grid.get(0, 2).is_none());
}

#[test]
fn undo_mid_gesture_cancels_it() {
    let mut editor = Editor::with_size(4, 4);
    editor.select_tool(ToolKind::Pencil);
    editor.pointer_down(1, GridPos::new(0, 0));
    editor.pointer_move(1, GridPos::new(2, 0));
    assert!(editor.undo());
    assert!(editor.state().is_idle());
    assert!(editor.document().is_blank());
    assert!(!editor.pointer_move(1, GridPos::new(3, 0)));
}
