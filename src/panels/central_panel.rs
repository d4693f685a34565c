use crate::renderer::CanvasView;
use crate::PaintApp;

/// The drawing surface: the grid at the current zoom, scrollable when it
/// does not fit.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let document = app.editor.document();
            let size = egui::vec2(
                document.width() as f32 * app.settings.zoom,
                document.height() as f32 * app.settings.zoom,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input
            app.handle_canvas_input(ctx, canvas_rect);

            let view = CanvasView {
                show_grid: app.settings.show_grid,
                preview: app.editor.preview(),
                preview_color: app.editor.color(),
            };
            app.renderer().render(&painter, canvas_rect, app.editor.document(), &view);
        });
    });
}
