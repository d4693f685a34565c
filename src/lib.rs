#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod overlay;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PaintApp;
pub use color::Rgba;
pub use command::{Command, CommandOutput, History};
pub use config::EditorSettings;
pub use document::Document;
pub use error::EditorError;
pub use export::{ExportFormat, ExportOptions};
pub use geometry::GridPos;
pub use grid::PixelGrid;
pub use input::{InputEvent, InputHandler};
pub use overlay::{OverlayPath, OverlayStore};
pub use renderer::Renderer;
pub use state::{Editor, EditorState, ProjectStore};
pub use tools::{Tool, ToolKind};
