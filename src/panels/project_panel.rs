use crate::config::{EXPORT_SCALE_RANGE, GRID_SIZE_RANGE};
use crate::export::ExportFormat;
use crate::PaintApp;

/// Project naming, canvas size, saved projects, import and export.
pub fn project_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("project_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Project");
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut app.settings.project_name);
            });
            if ui.button("Save").clicked() {
                app.save_project(ctx);
            }
            ui.separator();

            ui.label("New canvas");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut app.settings.grid_width).range(GRID_SIZE_RANGE));
                ui.label("x");
                ui.add(egui::DragValue::new(&mut app.settings.grid_height).range(GRID_SIZE_RANGE));
                if ui.button("New").clicked() {
                    app.new_document();
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.heading("Saved");
                if ui.small_button("⟳").on_hover_text("Refresh").clicked() {
                    app.refresh_projects(ctx);
                }
            });
            let mut load = None;
            let mut delete = None;
            egui::ScrollArea::vertical()
                .id_salt("saved_projects")
                .max_height(200.0)
                .show(ui, |ui| {
                    if app.projects.is_empty() {
                        ui.weak("No saved projects");
                    }
                    for meta in &app.projects {
                        ui.horizontal(|ui| {
                            ui.label(format!("{} ({}x{})", meta.name, meta.grid_w, meta.grid_h));
                            if ui.small_button("Open").clicked() {
                                load = Some(meta.id.clone());
                            }
                            if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                delete = Some(meta.id.clone());
                            }
                        });
                    }
                });
            if let Some(id) = load {
                app.load_project(ctx, &id);
            }
            if let Some(id) = delete {
                app.delete_project(ctx, &id);
            }
            ui.separator();

            ui.heading("Export");
            ui.add(egui::Slider::new(&mut app.settings.export_scale, EXPORT_SCALE_RANGE).text("Scale"));
            ui.add(egui::Slider::new(&mut app.settings.jpeg_quality, 1..=100).text("JPEG quality"));
            ui.horizontal_wrapped(|ui| {
                for format in ExportFormat::ALL {
                    if ui.button(format.label()).clicked() {
                        app.export(format);
                    }
                }
            });
            ui.separator();

            ui.heading("Import");
            #[cfg(not(target_arch = "wasm32"))]
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.import_path);
                if ui.add_enabled(!app.import_path.trim().is_empty(), egui::Button::new("Import")).clicked() {
                    app.import_from_path();
                }
            });
            ui.weak("Or drop a .json project onto the window.");

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}
