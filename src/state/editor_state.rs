/// The pointer state machine for the drawing surface.
///
/// ```text
///  ┌──────────┐  pointer down   ┌─────────────────────┐
///  │          ├────────────────►│                     │
///  │   Idle   │                 │ Dragging(pointer_id)│
///  │          │◄────────────────┤                     │
///  └──────────┘ up/cancel/leave └─────────────────────┘
/// ```
///
/// While dragging, only events from the captured pointer are honoured.
use crate::input::PointerId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture is in progress and owns the given pointer
    Dragging { pointer_id: PointerId },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The captured pointer, if a gesture is in progress
    pub fn active_pointer(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Dragging { pointer_id } => Some(*pointer_id),
        }
    }

    /// Whether an event from `pointer_id` belongs to the current gesture
    pub fn captures(&self, pointer_id: PointerId) -> bool {
        self.active_pointer() == Some(pointer_id)
    }

    /// Returns a string representation of the state for debugging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}
