mod editor_state;
pub mod context;
mod persistence;
pub mod store;

pub use editor_state::EditorState;
pub use context::Editor;
pub use persistence::{
    import_project,
    ImportError,
    ImportedProject,
    ProjectFile,
    ProjectMeta,
    MAX_IMPORT_DIMENSION,
};
pub use store::{DirStore, MemoryStore, ProjectStore, StoreError, StoreFuture, StoreResult};
