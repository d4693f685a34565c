use crate::command::{Command, CommandOutput};
use crate::config::EditorSettings;
use crate::export::ExportFormat;
use crate::file_handler::FileHandler;
use crate::input::{route_event, InputHandler};
use crate::panels::{central_panel, project_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::{Editor, ProjectFile, ProjectMeta, ProjectStore, StoreError};
use eframe::egui;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

/// Answers from the project store, applied on the next frame.
#[derive(Debug)]
enum StoreReply {
    Listed(Result<Vec<ProjectMeta>, StoreError>),
    Saved { name: String, result: Result<(), StoreError> },
    Loaded(Result<ProjectFile, StoreError>),
    Deleted { key: String, result: Result<(), StoreError> },
}

pub struct PaintApp {
    pub(crate) settings: EditorSettings,
    pub(crate) editor: Editor,
    input: InputHandler,
    renderer: Renderer,
    file_handler: FileHandler,
    store: Arc<dyn ProjectStore>,
    replies: Arc<Mutex<Vec<StoreReply>>>,
    pub(crate) projects: Vec<ProjectMeta>,
    pub(crate) status: Option<String>,
    pub(crate) import_path: String,
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store(settings: &EditorSettings) -> Arc<dyn ProjectStore> {
    Arc::new(crate::state::DirStore::new(settings.data_dir.join("projects")))
}

#[cfg(target_arch = "wasm32")]
fn default_store(_settings: &EditorSettings) -> Arc<dyn ProjectStore> {
    Arc::new(crate::state::MemoryStore::new())
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: EditorSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let store = default_store(&settings);
        let app = Self::with_store(settings, store);
        app.apply_theme(&cc.egui_ctx);
        app.refresh_projects(&cc.egui_ctx);
        app
    }

    pub fn with_store(settings: EditorSettings, store: Arc<dyn ProjectStore>) -> Self {
        let settings = settings.sanitized();
        let mut editor = Editor::with_size(settings.grid_width, settings.grid_height);
        editor.set_settings(settings.tool_settings());
        editor.set_history_limit(settings.history_limit);
        editor.set_export_options(settings.export_options());
        editor.set_project_name(settings.project_name.clone());

        Self {
            renderer: Renderer::new(settings.dark_mode),
            settings,
            editor,
            input: InputHandler::new(),
            file_handler: FileHandler::new(),
            store,
            replies: Arc::new(Mutex::new(Vec::new())),
            projects: Vec::new(),
            status: None,
            import_path: String::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    pub(crate) fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.settings.dark_mode = dark;
        self.renderer.set_dark_mode(dark);
        self.apply_theme(ctx);
    }

    pub(crate) fn report(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{message}");
        self.status = Some(message);
    }

    fn report_error(&mut self, context: &str, err: &dyn std::error::Error) {
        log::error!("{context}: {err}");
        self.status = Some(format!("{context}: {err}"));
    }

    // Canvas

    /// Feeds this frame's pointer input on `surface` to the editor.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, surface: egui::Rect) {
        self.input.set_surface_rect(surface);
        for event in self.input.process_input(ctx) {
            route_event(&event, &mut self.editor, surface.size());
        }
    }

    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    // Document operations

    fn run(&mut self, command: Command) {
        let name = format!("{command:?}");
        match self.editor.execute(command) {
            Ok(CommandOutput::Unchanged) => log::debug!("{name}: nothing to do"),
            Ok(_) => {}
            Err(err) => self.report_error("Command failed", &err),
        }
    }

    pub(crate) fn undo(&mut self) {
        self.run(Command::Undo);
    }

    pub(crate) fn redo(&mut self) {
        self.run(Command::Redo);
    }

    pub(crate) fn new_document(&mut self) {
        self.settings = std::mem::take(&mut self.settings).sanitized();
        self.run(Command::NewDocument {
            width: self.settings.grid_width,
            height: self.settings.grid_height,
        });
        self.report(format!("New {}x{} canvas", self.settings.grid_width, self.settings.grid_height));
    }

    pub(crate) fn import_json(&mut self, json: &str) {
        match self.editor.import_project(json) {
            Ok(()) => {
                self.settings.grid_width = self.editor.document().width();
                self.settings.grid_height = self.editor.document().height();
                self.settings.project_name = self.editor.project_name().to_owned();
                self.report("Project imported");
            }
            Err(err) => self.report_error("Import failed", &err),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn import_from_path(&mut self) {
        let path = self.import_path.trim().to_owned();
        match std::fs::read_to_string(&path) {
            Ok(json) => self.import_json(&json),
            Err(err) => self.report_error(&format!("Could not read {path}"), &err),
        }
    }

    pub(crate) fn export(&mut self, format: ExportFormat) {
        self.editor.set_export_options(self.settings.export_options());
        match self.editor.export(format) {
            Ok(bytes) => self.write_export(format, &bytes),
            Err(err) => self.report_error("Export failed", &err),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_export(&mut self, format: ExportFormat, bytes: &[u8]) {
        let dir = self.settings.data_dir.join("exports");
        let path = dir.join(format!("{}.{}", file_stem(self.editor.project_name()), format.extension()));
        let result = std::fs::create_dir_all(&dir).and_then(|()| std::fs::write(&path, bytes));
        match result {
            Ok(()) => self.report(format!("Exported {}", path.display())),
            Err(err) => self.report_error("Export failed", &err),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn write_export(&mut self, format: ExportFormat, bytes: &[u8]) {
        log::warn!("saving {} files is not supported on the web ({} bytes dropped)", format.label(), bytes.len());
        self.status = Some(format!("{} export is not available in the browser", format.label()));
    }

    // Project store

    fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = StoreReply> + Send + 'static,
    {
        let replies = self.replies.clone();
        let ctx = ctx.clone();
        let job = async move {
            let reply = task.await;
            replies.lock().push(reply);
            ctx.request_repaint();
        };

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || futures::executor::block_on(job));

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(job);
    }

    pub(crate) fn refresh_projects(&self, ctx: &egui::Context) {
        let store = self.store.clone();
        self.spawn(ctx, async move { StoreReply::Listed(store.list().await) });
    }

    pub(crate) fn save_project(&mut self, ctx: &egui::Context) {
        let project = self.editor.to_project_file();
        let name = project.name.clone();
        let store = self.store.clone();
        self.spawn(ctx, async move {
            StoreReply::Saved {
                name,
                result: store.save(project).await,
            }
        });
    }

    pub(crate) fn load_project(&self, ctx: &egui::Context, key: &str) {
        let store = self.store.clone();
        let key = key.to_owned();
        self.spawn(ctx, async move { StoreReply::Loaded(store.load(&key).await) });
    }

    pub(crate) fn delete_project(&self, ctx: &egui::Context, key: &str) {
        let store = self.store.clone();
        let key = key.to_owned();
        self.spawn(ctx, async move {
            let result = store.delete(&key).await;
            StoreReply::Deleted { key, result }
        });
    }

    fn apply_store_replies(&mut self, ctx: &egui::Context) {
        let replies = std::mem::take(&mut *self.replies.lock());
        for reply in replies {
            match reply {
                StoreReply::Listed(Ok(projects)) => self.projects = projects,
                StoreReply::Listed(Err(err)) => self.report_error("Could not list projects", &err),
                StoreReply::Saved { name, result: Ok(()) } => {
                    self.report(format!("Saved `{name}`"));
                    self.refresh_projects(ctx);
                }
                StoreReply::Saved { result: Err(err), .. } => self.report_error("Save failed", &err),
                StoreReply::Loaded(Ok(project)) => match self.editor.load_project(&project) {
                    Ok(()) => {
                        self.settings.project_name = project.name.clone();
                        self.settings.grid_width = project.grid_w;
                        self.settings.grid_height = project.grid_h;
                        self.report(format!("Loaded `{}`", project.name));
                    }
                    Err(err) => self.report_error("Saved project is damaged", &err),
                },
                StoreReply::Loaded(Err(err)) => self.report_error("Load failed", &err),
                StoreReply::Deleted { key, result: Ok(()) } => {
                    self.report(format!("Deleted `{key}`"));
                    self.refresh_projects(ctx);
                }
                StoreReply::Deleted { result: Err(err), .. } => self.report_error("Delete failed", &err),
            }
        }
    }

    // Keyboard

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        let typing = ctx.wants_keyboard_input();
        let (undo, redo, new_doc, save, zoom_in, zoom_out, toggle_grid) = ctx.input_mut(|i| {
            // Redo first: Cmd+Shift+Z would otherwise also match Cmd+Z.
            let redo = i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || i.consume_key(Modifiers::COMMAND, Key::Y);
            let undo = i.consume_key(Modifiers::COMMAND, Key::Z);
            let new_doc = i.consume_key(Modifiers::COMMAND, Key::N);
            let save = i.consume_key(Modifiers::COMMAND, Key::S);
            if typing {
                return (undo, redo, new_doc, save, false, false, false);
            }
            let zoom_in = i.consume_key(Modifiers::NONE, Key::Plus) || i.consume_key(Modifiers::NONE, Key::Equals);
            let zoom_out = i.consume_key(Modifiers::NONE, Key::Minus);
            let toggle_grid = i.consume_key(Modifiers::NONE, Key::G);
            (undo, redo, new_doc, save, zoom_in, zoom_out, toggle_grid)
        });

        if redo {
            self.redo();
        } else if undo {
            self.undo();
        }
        if new_doc {
            self.new_document();
        }
        if save {
            self.save_project(ctx);
        }
        if zoom_in {
            self.settings.zoom_in();
        }
        if zoom_out {
            self.settings.zoom_out();
        }
        if toggle_grid {
            self.settings.show_grid = !self.settings.show_grid;
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        if self.file_handler.check_for_dropped_files(ctx) {
            for json in self.file_handler.take_project_texts() {
                self.import_json(&json);
            }
        }
    }
}

/// Project name reduced to something safe as a file name.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { "pixel-art".to_owned() } else { stem }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.capture_tool_settings(self.editor.settings());
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_store_replies(ctx);
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        tools_panel(self, ctx);
        project_panel(self, ctx);
        central_panel(self, ctx);

        if self.settings.project_name != self.editor.project_name() {
            self.editor.set_project_name(self.settings.project_name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_is_sanitized() {
        assert_eq!(file_stem("My Pixel Pet"), "My_Pixel_Pet");
        assert_eq!(file_stem("  "), "pixel-art");
        assert_eq!(file_stem("../x"), "___x");
    }

    #[test]
    fn app_starts_from_settings() {
        let settings = EditorSettings {
            grid_width: 8,
            grid_height: 6,
            ..Default::default()
        };
        let app = PaintApp::with_store(settings, Arc::new(crate::state::MemoryStore::new()));
        assert_eq!((app.editor().document().width(), app.editor().document().height()), (8, 6));
        assert_eq!(app.editor().project_name(), crate::config::DEFAULT_PROJECT_NAME);
    }
}
