use crate::color::Rgba;
use crate::export::ExportFormat;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Explicit editor operations, as triggered by buttons and shortcuts.
///
/// Pointer gestures go through the tool pipeline instead; see
/// [`crate::state::Editor::pointer_down`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Undo,
    Redo,

    /// Replace the document with a blank one and forget history
    NewDocument { width: usize, height: usize },

    /// Change the active tool
    SelectTool(ToolKind),

    SetColor(Rgba),
    SetFillShapes(bool),
    SetAccentWidth(f32),

    /// Load a project from JSON text
    Import(String),

    /// Encode the current document
    Export(ExportFormat),
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// The command ran and changed something
    Applied,
    /// The command was valid but had nothing to do (e.g. undo with empty history)
    Unchanged,
    /// Encoded bytes of an export
    Exported { format: ExportFormat, bytes: Vec<u8> },
}

impl CommandOutput {
    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Unchanged }
    }
}
