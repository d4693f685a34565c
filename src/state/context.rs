//! The editor core: document, history, active tool and pointer state.
//!
//! Everything the UI does goes through [`Editor`]. Pointer input arrives as
//! grid cells (see [`crate::input::route_event`] for the mapping) and is
//! handed to the active tool; the tool's [`Edit`] is then applied here.
//! Explicit operations go through [`Editor::execute`].

use super::persistence::{self, ImportError, ProjectFile};
use super::EditorState;
use crate::color::Rgba;
use crate::command::{Command, CommandOutput, CommandResult, Edit, EditContext, History};
use crate::document::Document;
use crate::export::{self, ExportError, ExportFormat, ExportOptions};
use crate::geometry::GridPos;
use crate::input::PointerId;
use crate::tools::{Tool, ToolContext, ToolKind, ToolSettings, ToolType};
use crate::util::time;
use uuid::Uuid;

#[derive(Debug)]
pub struct Editor {
    document: Document,
    history: History,
    tool: ToolType,
    settings: ToolSettings,
    state: EditorState,
    export_options: ExportOptions,
    project_id: String,
    project_name: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl Editor {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            history: History::new(),
            tool: ToolType::default(),
            settings: ToolSettings::default(),
            state: EditorState::Idle,
            export_options: ExportOptions::default(),
            project_id: Uuid::new_v4().to_string(),
            project_name: crate::config::DEFAULT_PROJECT_NAME.to_owned(),
        }
    }

    /// A blank `width` x `height` document
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(Document::new(width, height))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    /// Cells the active tool wants highlighted
    pub fn preview(&self) -> &[GridPos] {
        self.tool.preview()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ToolSettings) {
        self.settings = settings;
    }

    pub fn color(&self) -> Rgba {
        self.settings.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.settings.color = color;
    }

    pub fn set_fill_shapes(&mut self, fill: bool) {
        self.settings.fill_shapes = fill;
    }

    pub fn set_accent_width(&mut self, width: f32) {
        let range = crate::config::ACCENT_WIDTH_RANGE;
        self.settings.accent_width = if width.is_finite() {
            width.clamp(*range.start(), *range.end())
        } else {
            *range.start()
        };
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }

    pub fn set_export_options(&mut self, options: ExportOptions) {
        self.export_options = options;
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    fn apply(&mut self, edit: Edit) -> bool {
        let mut ctx = EditContext {
            document: &mut self.document,
            active_color: &mut self.settings.color,
        };
        edit.execute(&mut ctx)
    }

    /// Ends the gesture in progress, if any, without committing it.
    fn abort_gesture(&mut self) {
        if self.state.is_dragging() {
            log::debug!("aborting {} gesture", self.tool.name());
        }
        self.tool.cancel();
        self.document.overlay.end_stroke();
        self.state = EditorState::Idle;
    }

    // Pointer pipeline

    /// Starts a gesture. Ignored while another pointer owns a gesture.
    pub fn pointer_down(&mut self, pointer_id: PointerId, cell: GridPos) -> bool {
        if let Some(active) = self.state.active_pointer() {
            if active != pointer_id {
                return false;
            }
        }
        self.state = EditorState::Dragging { pointer_id };
        if self.tool.records_history() {
            self.history.push_snapshot(&self.document);
        }
        let ctx = ToolContext::new(&self.document, &self.settings);
        if let Some(edit) = self.tool.on_pointer_down(cell, &ctx) {
            self.apply(edit);
        }
        true
    }

    /// Continues the gesture owned by `pointer_id`.
    pub fn pointer_move(&mut self, pointer_id: PointerId, cell: GridPos) -> bool {
        if !self.state.captures(pointer_id) {
            return false;
        }
        let ctx = ToolContext::new(&self.document, &self.settings);
        if let Some(edit) = self.tool.on_pointer_move(cell, &ctx) {
            self.apply(edit);
        }
        true
    }

    /// Finishes the gesture owned by `pointer_id` and releases the pointer.
    pub fn pointer_up(&mut self, pointer_id: PointerId, cell: GridPos) -> bool {
        if !self.state.captures(pointer_id) {
            return false;
        }
        let ctx = ToolContext::new(&self.document, &self.settings);
        if let Some(edit) = self.tool.on_pointer_up(cell, &ctx) {
            self.apply(edit);
        }
        self.document.overlay.end_stroke();
        self.state = EditorState::Idle;
        true
    }

    /// Abandons the gesture owned by `pointer_id`. Edits already applied
    /// stay; the undo snapshot taken at pointer-down still covers them.
    pub fn pointer_cancel(&mut self, pointer_id: PointerId) -> bool {
        if !self.state.captures(pointer_id) {
            return false;
        }
        self.abort_gesture();
        true
    }

    /// The pointer left the surface. Only meaningful mid-gesture.
    pub fn pointer_leave(&mut self, pointer_id: PointerId) -> bool {
        self.pointer_cancel(pointer_id)
    }

    // Explicit operations

    /// Activates `kind`. Any gesture in progress is dropped, and so is all
    /// transient tool state, even when re-selecting the current tool.
    pub fn select_tool(&mut self, kind: ToolKind) {
        self.abort_gesture();
        if self.tool.kind() == kind {
            self.tool.reset();
        } else {
            self.tool = ToolType::new(kind);
        }
        log::debug!("selected tool {}", self.tool.name());
    }

    pub fn undo(&mut self) -> bool {
        self.abort_gesture();
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.document = previous;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.abort_gesture();
        match self.history.redo(&self.document) {
            Some(next) => {
                self.document = next;
                true
            }
            None => false,
        }
    }

    fn replace_document(&mut self, document: Document) {
        self.abort_gesture();
        self.tool.reset();
        self.history.clear();
        self.document = document;
    }

    /// Discards the document and its history for a blank one. The project
    /// gets a fresh identity; its name is kept.
    pub fn new_document(&mut self, width: usize, height: usize) {
        self.replace_document(Document::new(width, height));
        self.project_id = Uuid::new_v4().to_string();
        log::info!("new {}x{} document", self.document.width(), self.document.height());
    }

    /// Replaces the document with one parsed from `json`. On error nothing
    /// changes.
    pub fn import_project(&mut self, json: &str) -> Result<(), ImportError> {
        let imported = persistence::import_project(json)?;
        self.replace_document(imported.document);
        if let Some(id) = imported.id {
            self.project_id = id;
        }
        if let Some(name) = imported.name {
            self.project_name = name;
        }
        Ok(())
    }

    /// Opens a project loaded from a store, adopting its id and name.
    pub fn load_project(&mut self, project: &ProjectFile) -> Result<(), ImportError> {
        let document = project.to_document()?;
        self.replace_document(document);
        self.project_id = project.id.clone();
        self.project_name = project.name.clone();
        log::info!("loaded project `{}`", self.project_name);
        Ok(())
    }

    /// The current document as a saveable project, stamped with the current time.
    pub fn to_project_file(&self) -> ProjectFile {
        ProjectFile::from_document(
            self.project_id.clone(),
            self.project_name.clone(),
            time::epoch_millis(),
            &self.document,
        )
    }

    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        export::export(&self.document, format, &self.export_options)
    }

    /// Runs an explicit command.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let output = match command {
            Command::Undo => CommandOutput::from_changed(self.undo()),
            Command::Redo => CommandOutput::from_changed(self.redo()),
            Command::NewDocument { width, height } => {
                self.new_document(width, height);
                CommandOutput::Applied
            }
            Command::SelectTool(kind) => {
                self.select_tool(kind);
                CommandOutput::Applied
            }
            Command::SetColor(color) => {
                self.set_color(color);
                CommandOutput::Applied
            }
            Command::SetFillShapes(fill) => {
                self.set_fill_shapes(fill);
                CommandOutput::Applied
            }
            Command::SetAccentWidth(width) => {
                self.set_accent_width(width);
                CommandOutput::Applied
            }
            Command::Import(json) => {
                self.import_project(&json)?;
                CommandOutput::Applied
            }
            Command::Export(format) => CommandOutput::Exported {
                format,
                bytes: self.export(format)?,
            },
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(editor: &mut Editor, cell: (i32, i32)) {
        let cell = GridPos::from(cell);
        assert!(editor.pointer_down(1, cell));
        assert!(editor.pointer_up(1, cell));
    }

    #[test]
    fn stamp_then_undo() {
        let mut editor = Editor::with_size(4, 4);
        click(&mut editor, (2, 3));
        assert_eq!(editor.document().grid.get(2, 3), Some(editor.color()));
        assert!(editor.undo());
        assert!(editor.document().is_blank());
        assert!(editor.redo());
        assert!(!editor.document().is_blank());
    }

    #[test]
    fn second_pointer_is_ignored_mid_gesture() {
        let mut editor = Editor::with_size(4, 4);
        editor.select_tool(ToolKind::Pencil);
        assert!(editor.pointer_down(1, GridPos::new(0, 0)));
        assert!(!editor.pointer_down(2, GridPos::new(3, 3)));
        assert!(!editor.pointer_move(2, GridPos::new(3, 3)));
        assert!(!editor.pointer_up(2, GridPos::new(3, 3)));
        assert!(editor.state().captures(1));
        assert_eq!(editor.document().grid.get(3, 3), None);
        assert!(editor.pointer_up(1, GridPos::new(0, 0)));
        assert!(editor.state().is_idle());
    }

    #[test]
    fn leave_while_idle_is_ignored() {
        let mut editor = Editor::with_size(4, 4);
        assert!(!editor.pointer_leave(1));
    }

    #[test]
    fn picker_sets_color_without_history() {
        let mut editor = Editor::with_size(2, 2);
        let red = Rgba::new(255, 0, 0, 0.75);
        editor.set_color(red);
        click(&mut editor, (0, 0));
        editor.set_color(Rgba::BLACK);
        let depth = editor.history().undo_depth();

        editor.select_tool(ToolKind::Picker);
        click(&mut editor, (0, 0));
        assert_eq!(editor.color(), red);
        assert_eq!(editor.history().undo_depth(), depth);

        click(&mut editor, (1, 1));
        assert_eq!(editor.color(), red);
    }

    #[test]
    fn accent_stroke_closes_on_release() {
        let mut editor = Editor::with_size(8, 8);
        editor.select_tool(ToolKind::Accent);
        editor.pointer_down(1, GridPos::new(0, 0));
        editor.pointer_move(1, GridPos::new(2, 2));
        editor.pointer_up(1, GridPos::new(2, 2));
        assert!(!editor.document().overlay.is_stroke_open());
        assert_eq!(editor.document().overlay.paths()[0].points.len(), 2);
        assert!(editor.document().grid.is_blank());
    }

    #[test]
    fn failed_import_leaves_document() {
        let mut editor = Editor::with_size(2, 2);
        click(&mut editor, (0, 0));
        let before = editor.document().clone();
        assert!(editor.import_project(r#"{"w":2,"h":2,"pixels":[[null]]}"#).is_err());
        assert_eq!(editor.document(), &before);
        assert!(editor.history().can_undo());
    }

    #[test]
    fn new_document_clears_history() {
        let mut editor = Editor::with_size(2, 2);
        click(&mut editor, (0, 0));
        let id = editor.project_id().to_owned();
        editor.execute(Command::NewDocument { width: 5, height: 3 }).unwrap();
        assert_eq!((editor.document().width(), editor.document().height()), (5, 3));
        assert!(!editor.history().can_undo());
        assert_ne!(editor.project_id(), id);
    }

    #[test]
    fn execute_reports_noop_undo() {
        let mut editor = Editor::with_size(2, 2);
        assert_eq!(editor.execute(Command::Undo).unwrap(), CommandOutput::Unchanged);
    }
}
