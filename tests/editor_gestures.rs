use egui::{pos2, vec2};
use pixel_paint::input::{route_event, InputEvent};
use pixel_paint::{Editor, GridPos, Rgba, ToolKind};

fn click(editor: &mut Editor, x: i32, y: i32) {
    let cell = GridPos::new(x, y);
    editor.pointer_down(1, cell);
    editor.pointer_up(1, cell);
}

fn drag(editor: &mut Editor, path: &[(i32, i32)]) {
    let (first, rest) = path.split_first().expect("non-empty path");
    editor.pointer_down(1, GridPos::from(*first));
    for &p in rest {
        editor.pointer_move(1, GridPos::from(p));
    }
    let last = rest.last().unwrap_or(first);
    editor.pointer_up(1, GridPos::from(*last));
}

#[test]
fn stamp_then_undo_leaves_blank_grid() {
    let mut editor = Editor::with_size(4, 4);
    click(&mut editor, 1, 2);
    assert!(!editor.document().is_blank());
    assert!(editor.undo());
    assert!(editor.document().is_blank());
    assert_eq!((editor.document().width(), editor.document().height()), (4, 4));
}

#[test]
fn pencil_drag_has_no_gaps() {
    let mut editor = Editor::with_size(16, 16);
    editor.select_tool(ToolKind::Pencil);
    drag(&mut editor, &[(0, 0), (10, 0), (10, 5)]);
    for x in 0..=10 {
        assert!(editor.document().grid.get(x, 0).is_some(), "gap at x={x}");
    }
    for y in 0..=5 {
        assert!(editor.document().grid.get(10, y).is_some(), "gap at y={y}");
    }
}

#[test]
fn eraser_clears_painted_cells() {
    let mut editor = Editor::with_size(8, 1);
    editor.select_tool(ToolKind::Pencil);
    drag(&mut editor, &[(0, 0), (7, 0)]);
    editor.select_tool(ToolKind::Eraser);
    drag(&mut editor, &[(2, 0), (4, 0)]);
    let painted: Vec<i32> = (0..8).filter(|&x| editor.document().grid.get(x, 0).is_some()).collect();
    assert_eq!(painted, vec![0, 1, 5, 6, 7]);
}

#[test]
fn shapes_preview_while_dragging_and_commit_on_release() {
    let mut editor = Editor::with_size(10, 10);
    editor.select_tool(ToolKind::Rect);
    editor.pointer_down(1, GridPos::new(1, 1));
    editor.pointer_move(1, GridPos::new(4, 3));
    assert_eq!(editor.preview().len(), 10);
    assert!(editor.document().is_blank());
    editor.pointer_up(1, GridPos::new(4, 3));
    assert!(editor.preview().is_empty());
    assert_eq!(editor.document().grid.painted().count(), 10);
}

#[test]
fn filled_rect_and_circle() {
    let mut editor = Editor::with_size(20, 20);
    editor.set_fill_shapes(true);
    editor.select_tool(ToolKind::Rect);
    drag(&mut editor, &[(0, 0), (2, 2)]);
    assert_eq!(editor.document().grid.painted().count(), 9);

    editor.new_document(20, 20);
    editor.select_tool(ToolKind::Circle);
    drag(&mut editor, &[(10, 10), (13, 14)]);
    // radius hypot(3, 4) = 5
    assert!(editor.document().grid.get(15, 10).is_some());
    assert!(editor.document().grid.get(10, 10).is_none());
}

#[test]
fn curve_needs_three_clicks() {
    let mut editor = Editor::with_size(12, 3);
    editor.select_tool(ToolKind::Curve);
    click(&mut editor, 0, 0);
    click(&mut editor, 5, 0);
    assert!(editor.document().is_blank());
    click(&mut editor, 10, 0);
    let painted: Vec<GridPos> = editor.document().grid.painted().map(|(p, _)| p).collect();
    assert_eq!(painted, pixel_paint::geometry::line(0, 0, 10, 0));
}

#[test]
fn switching_tools_drops_curve_anchors() {
    let mut editor = Editor::with_size(12, 3);
    editor.select_tool(ToolKind::Curve);
    click(&mut editor, 0, 0);
    click(&mut editor, 5, 0);
    editor.select_tool(ToolKind::Curve);
    click(&mut editor, 10, 0);
    assert!(editor.document().is_blank());
}

#[test]
fn cancel_keeps_curve_anchors() {
    let mut editor = Editor::with_size(12, 3);
    editor.select_tool(ToolKind::Curve);
    click(&mut editor, 0, 0);
    click(&mut editor, 5, 0);
    editor.pointer_down(1, GridPos::new(8, 0));
    editor.pointer_move(1, GridPos::new(9, 0));
    assert!(!editor.preview().is_empty());
    assert!(editor.pointer_cancel(1));
    assert!(editor.preview().is_empty());
    click(&mut editor, 10, 0);
    assert!(!editor.document().is_blank());
}

#[test]
fn accent_strokes_are_overlay_only() {
    let mut editor = Editor::with_size(8, 8);
    editor.set_accent_width(3.0);
    editor.set_color(Rgba::rgb(1, 2, 3));
    editor.select_tool(ToolKind::Accent);
    drag(&mut editor, &[(0, 0), (1, 1), (2, 2)]);
    drag(&mut editor, &[(5, 5), (6, 6)]);

    let paths = editor.document().overlay.paths();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].points.len(), 3);
    assert_eq!(paths[0].width, 3.0);
    assert_eq!(paths[0].color, Rgba::rgb(1, 2, 3));
    assert!(editor.document().grid.is_blank());

    assert!(editor.undo());
    assert_eq!(editor.document().overlay.len(), 1);
}

#[test]
fn leave_mid_gesture_ends_it() {
    let mut editor = Editor::with_size(8, 8);
    editor.select_tool(ToolKind::Pencil);
    editor.pointer_down(1, GridPos::new(0, 0));
    assert!(editor.pointer_leave(1));
    assert!(editor.state().is_idle());
    assert!(!editor.pointer_move(1, GridPos::new(5, 5)));
    assert!(editor.document().grid.get(5, 5).is_none());
}

#[test]
fn routed_events_use_rendered_surface_size() {
    let mut editor = Editor::with_size(10, 10);
    editor.select_tool(ToolKind::Pencil);
    // Zoomed to 8 px per cell
    let surface = vec2(80.0, 80.0);
    let events = [
        InputEvent::PointerDown { pointer_id: 3, position: pos2(4.0, 4.0) },
        InputEvent::PointerMove { pointer_id: 3, position: pos2(1000.0, 4.0) },
        InputEvent::PointerUp { pointer_id: 3, position: pos2(1000.0, 4.0) },
    ];
    for event in &events {
        assert!(route_event(event, &mut editor, surface));
    }
    for x in 0..10 {
        assert!(editor.document().grid.get(x, 0).is_some());
    }
}
