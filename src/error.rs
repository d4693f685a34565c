use crate::export::ExportError;
use crate::state::{ImportError, StoreError};
use thiserror::Error;

/// Any failure an editor operation can report to the user.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("project storage failed: {0}")]
    Store(#[from] StoreError),
}
