use eframe::egui;

/// Collects project files dropped onto the window.
#[derive(Debug, Default)]
pub struct FileHandler {
    project_texts: Vec<String>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process any newly dropped files from the UI context
    /// Returns true if any project files were picked up
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let before = self.project_texts.len();

        for file in &dropped {
            let file_name = display_name(file);
            if !is_project_file(file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }
            match read_text(file) {
                Some(text) => {
                    log::info!("Importing dropped project: {}", file_name);
                    self.project_texts.push(text);
                }
                None => log::warn!("Dropped file has no accessible data: {}", file_name),
            }
        }

        self.project_texts.len() > before
    }

    /// Drains the JSON texts collected so far, oldest first.
    pub fn take_project_texts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.project_texts)
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }
        let text = ctx.input(|i| {
            let mut text = "Drop a project to open it:\n".to_owned();
            for file in &i.raw.hovered_files {
                match &file.path {
                    Some(path) => text += &format!("\n{}", path.display()),
                    None => text += "\n(Path not available)",
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

const PROJECT_EXTENSIONS: [&str; 2] = [".json", ".gumdrop"];

/// Check if a file is a project based on MIME type or extension
fn is_project_file(file: &egui::DroppedFile) -> bool {
    if file.mime == "application/json" {
        return true;
    }
    let name = file
        .path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.name.clone());
    let name = name.to_lowercase();
    PROJECT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn read_text(file: &egui::DroppedFile) -> Option<String> {
    if let Some(bytes) = &file.bytes {
        return String::from_utf8(bytes.to_vec()).ok();
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                log::error!("Failed to read dropped file: {}: {}", path.display(), err);
                None
            }
        };
    }

    None
}
