use crate::color::Rgba;
use crate::command::Edit;
use crate::document::Document;
use crate::geometry::GridPos;
use serde::{Deserialize, Serialize};

/// Drawing parameters shared by every tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub color: Rgba,
    /// Rectangles fill their interior instead of drawing the border
    pub fill_shapes: bool,
    /// Stroke width for accent overlays
    pub accent_width: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Rgba::from_hex(crate::config::DEFAULT_COLOR, 1.0),
            fill_shapes: false,
            accent_width: 1.0,
        }
    }
}

/// Read-only view a tool gets when handling a pointer event.
pub struct ToolContext<'a> {
    pub document: &'a Document,
    pub settings: &'a ToolSettings,
}

impl<'a> ToolContext<'a> {
    pub fn new(document: &'a Document, settings: &'a ToolSettings) -> Self {
        Self { document, settings }
    }
}

/// Tool trait defines the interface for all drawing tools
///
/// Tools receive grid cells, already mapped and clamped, and answer with an
/// optional [`Edit`] for the editor to apply. The editor pushes the undo
/// snapshot before `on_pointer_down` when [`Tool::records_history`] says so.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Return the name of the tool
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// Whether starting a gesture with this tool should record an undo step
    fn records_history(&self) -> bool {
        true
    }

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit>;

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit>;

    /// Handle pointer release. Return an edit to finalize the gesture.
    fn on_pointer_up(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit>;

    /// Abandon the gesture in progress. State that spans several gestures
    /// (curve anchors) survives.
    fn cancel(&mut self);

    /// Drop every bit of transient state. Called when the tool is (re)selected.
    fn reset(&mut self) {
        self.cancel();
    }

    /// Cells to highlight for the gesture in progress
    fn preview(&self) -> &[GridPos];
}

mod accent;
mod curve;
mod freehand;
mod picker;
mod shape;
mod stamp;

pub use accent::AccentTool;
pub use curve::{CurveAnchors, CurveTool};
pub use freehand::{FreehandMode, FreehandTool};
pub use picker::PickerTool;
pub use shape::{ShapeKind, ShapeTool};
pub use stamp::StampTool;

/// The selectable tools, as named in the UI and in saved settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Stamp,
    Pencil,
    Eraser,
    Line,
    Rect,
    Circle,
    Curve,
    Accent,
    Picker,
}

impl ToolKind {
    pub const ALL: [ToolKind; 9] = [
        ToolKind::Stamp,
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rect,
        ToolKind::Circle,
        ToolKind::Curve,
        ToolKind::Accent,
        ToolKind::Picker,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Stamp => "Pixel Stamp",
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
            ToolKind::Rect => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Curve => "Curve",
            ToolKind::Accent => "Accent Pen",
            ToolKind::Picker => "Picker",
        }
    }
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug, Clone)]
pub enum ToolType {
    Stamp(StampTool),
    Freehand(FreehandTool),
    Shape(ShapeTool),
    Curve(CurveTool),
    Accent(AccentTool),
    Picker(PickerTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Stamp => Self::Stamp(StampTool::new()),
            ToolKind::Pencil => Self::Freehand(FreehandTool::new(FreehandMode::Pencil)),
            ToolKind::Eraser => Self::Freehand(FreehandTool::new(FreehandMode::Eraser)),
            ToolKind::Line => Self::Shape(ShapeTool::new(ShapeKind::Line)),
            ToolKind::Rect => Self::Shape(ShapeTool::new(ShapeKind::Rect)),
            ToolKind::Circle => Self::Shape(ShapeTool::new(ShapeKind::Circle)),
            ToolKind::Curve => Self::Curve(CurveTool::new()),
            ToolKind::Accent => Self::Accent(AccentTool::new()),
            ToolKind::Picker => Self::Picker(PickerTool),
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::Stamp(tool) => tool.kind(),
            Self::Freehand(tool) => tool.kind(),
            Self::Shape(tool) => tool.kind(),
            Self::Curve(tool) => tool.kind(),
            Self::Accent(tool) => tool.kind(),
            Self::Picker(tool) => tool.kind(),
        }
    }

    fn records_history(&self) -> bool {
        match self {
            Self::Stamp(tool) => tool.records_history(),
            Self::Freehand(tool) => tool.records_history(),
            Self::Shape(tool) => tool.records_history(),
            Self::Curve(tool) => tool.records_history(),
            Self::Accent(tool) => tool.records_history(),
            Self::Picker(tool) => tool.records_history(),
        }
    }

    fn on_pointer_down(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        match self {
            Self::Stamp(tool) => tool.on_pointer_down(cell, ctx),
            Self::Freehand(tool) => tool.on_pointer_down(cell, ctx),
            Self::Shape(tool) => tool.on_pointer_down(cell, ctx),
            Self::Curve(tool) => tool.on_pointer_down(cell, ctx),
            Self::Accent(tool) => tool.on_pointer_down(cell, ctx),
            Self::Picker(tool) => tool.on_pointer_down(cell, ctx),
        }
    }

    fn on_pointer_move(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        match self {
            Self::Stamp(tool) => tool.on_pointer_move(cell, ctx),
            Self::Freehand(tool) => tool.on_pointer_move(cell, ctx),
            Self::Shape(tool) => tool.on_pointer_move(cell, ctx),
            Self::Curve(tool) => tool.on_pointer_move(cell, ctx),
            Self::Accent(tool) => tool.on_pointer_move(cell, ctx),
            Self::Picker(tool) => tool.on_pointer_move(cell, ctx),
        }
    }

    fn on_pointer_up(&mut self, cell: GridPos, ctx: &ToolContext<'_>) -> Option<Edit> {
        match self {
            Self::Stamp(tool) => tool.on_pointer_up(cell, ctx),
            Self::Freehand(tool) => tool.on_pointer_up(cell, ctx),
            Self::Shape(tool) => tool.on_pointer_up(cell, ctx),
            Self::Curve(tool) => tool.on_pointer_up(cell, ctx),
            Self::Accent(tool) => tool.on_pointer_up(cell, ctx),
            Self::Picker(tool) => tool.on_pointer_up(cell, ctx),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Stamp(tool) => tool.cancel(),
            Self::Freehand(tool) => tool.cancel(),
            Self::Shape(tool) => tool.cancel(),
            Self::Curve(tool) => tool.cancel(),
            Self::Accent(tool) => tool.cancel(),
            Self::Picker(tool) => tool.cancel(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Stamp(tool) => tool.reset(),
            Self::Freehand(tool) => tool.reset(),
            Self::Shape(tool) => tool.reset(),
            Self::Curve(tool) => tool.reset(),
            Self::Accent(tool) => tool.reset(),
            Self::Picker(tool) => tool.reset(),
        }
    }

    fn preview(&self) -> &[GridPos] {
        match self {
            Self::Stamp(tool) => tool.preview(),
            Self::Freehand(tool) => tool.preview(),
            Self::Shape(tool) => tool.preview(),
            Self::Curve(tool) => tool.preview(),
            Self::Accent(tool) => tool.preview(),
            Self::Picker(tool) => tool.preview(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_matches_kind() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolType::new(kind).kind(), kind);
        }
    }

    #[test]
    fn only_picker_skips_history() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolType::new(kind).records_history(), kind != ToolKind::Picker);
        }
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ToolKind::Accent).unwrap(), "\"accent\"");
    }
}
