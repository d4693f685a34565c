mod commands;
mod edits;
mod history;

pub use commands::{Command, CommandOutput};
pub use edits::{Edit, EditContext};
pub use history::History;

/// Result type for command operations
pub type CommandResult = Result<CommandOutput, crate::error::EditorError>;
