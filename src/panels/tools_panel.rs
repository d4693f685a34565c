use crate::color::Rgba;
use crate::config::{ACCENT_WIDTH_RANGE, ZOOM_RANGE};
use crate::tools::ToolKind;
use crate::PaintApp;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.editor.tool_kind();
            for kind in ToolKind::ALL {
                if ui.selectable_label(active == kind, kind.label()).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    app.editor.select_tool(kind);
                }
            }
            ui.separator();

            ui.heading("Brush");
            let mut tools = *app.editor.settings();
            let mut rgb = [tools.color.r, tools.color.g, tools.color.b];
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgb(ui, &mut rgb);
                ui.monospace(tools.color.to_hex());
            });
            let mut alpha = tools.color.a;
            ui.add(egui::Slider::new(&mut alpha, 0.0..=1.0).text("Alpha"));
            tools.color = Rgba::new(rgb[0], rgb[1], rgb[2], alpha);

            ui.checkbox(&mut tools.fill_shapes, "Fill shapes");
            if active == ToolKind::Accent {
                ui.add(egui::Slider::new(&mut tools.accent_width, ACCENT_WIDTH_RANGE).text("Accent width"));
            }
            if tools != *app.editor.settings() {
                app.editor.set_color(tools.color);
                app.editor.set_fill_shapes(tools.fill_shapes);
                app.editor.set_accent_width(tools.accent_width);
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.editor.history().can_undo();
                let can_redo = app.editor.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            let history = app.editor.history();
            ui.label(format!("Undo steps: {}  Redo steps: {}", history.undo_depth(), history.redo_depth()));
            ui.separator();

            ui.heading("View");
            ui.add(egui::Slider::new(&mut app.settings.zoom, ZOOM_RANGE).step_by(2.0).text("Zoom"));
            ui.checkbox(&mut app.settings.show_grid, "Show grid");
            let mut dark = app.settings.dark_mode;
            if ui.checkbox(&mut dark, "Dark mode").changed() {
                app.set_dark_mode(ctx, dark);
            }
        });
}
