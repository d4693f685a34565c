//! Project files: the JSON shape saved to stores and accepted by import.

use crate::document::Document;
use crate::grid::{GridShapeError, Pixel, PixelGrid};
use crate::overlay::{OverlayPath, OverlayStore};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Largest grid dimension accepted from outside.
pub const MAX_IMPORT_DIMENSION: u64 = 1024;

/// Errors that can occur while reading a project
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("grid dimensions {width}x{height} are outside 1..=1024")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("pixel rows do not match the grid size: {0}")]
    Shape(#[from] GridShapeError),
}

/// A saved project, as stored and listed by a [`super::ProjectStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: String,
    pub name: String,
    /// Milliseconds since the UNIX epoch
    pub updated: i64,
    pub grid_w: usize,
    pub grid_h: usize,
    pub pixels: Vec<Vec<Pixel>>,
    #[serde(default)]
    pub overlay_paths: Vec<OverlayPath>,
}

/// Listing entry for a saved project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub id: String,
    pub name: String,
    pub updated: i64,
    pub grid_w: usize,
    pub grid_h: usize,
}

impl ProjectFile {
    pub fn from_document(id: impl Into<String>, name: impl Into<String>, updated: i64, document: &Document) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            updated,
            grid_w: document.width(),
            grid_h: document.height(),
            pixels: document.grid.to_rows(),
            overlay_paths: document.overlay.paths().to_vec(),
        }
    }

    /// Rebuilds the document, checking the rows against the stated size.
    pub fn to_document(&self) -> Result<Document, ImportError> {
        check_dimensions(self.grid_w as u64, self.grid_h as u64)?;
        let grid = PixelGrid::from_rows(self.grid_w, self.grid_h, self.pixels.clone())?;
        Ok(Document::from_parts(grid, OverlayStore::from_paths(self.overlay_paths.clone())))
    }

    pub fn meta(&self) -> ProjectMeta {
        ProjectMeta {
            id: self.id.clone(),
            name: self.name.clone(),
            updated: self.updated,
            grid_w: self.grid_w,
            grid_h: self.grid_h,
        }
    }

    /// Whether `key` names this project, by id or by name
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedProject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub document: Document,
}

/// Parses a project from JSON text.
///
/// Accepts both the saved-project shape (`gridW`/`gridH`) and the plain JSON
/// export shape (`w`/`h`); when both are present `w`/`h` win. `overlayPaths`
/// is optional and cell alpha defaults to 1. Nothing is returned unless the
/// whole input is valid.
pub fn import_project(json: &str) -> Result<ImportedProject, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;

    let width = dimension(object, "w", "gridW")?;
    let height = dimension(object, "h", "gridH")?;
    check_dimensions(width, height)?;

    let pixels = object.get("pixels").ok_or(ImportError::MissingField("pixels"))?;
    let rows: Vec<Vec<Pixel>> = field(pixels, "pixels")?;
    let grid = PixelGrid::from_rows(width as usize, height as usize, rows)?;

    let overlay = match object.get("overlayPaths") {
        None | Some(Value::Null) => OverlayStore::new(),
        Some(paths) => OverlayStore::from_paths(field(paths, "overlayPaths")?),
    };

    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);
    let imported = ImportedProject {
        id: text("id"),
        name: text("name"),
        document: Document::from_parts(grid, overlay),
    };
    log::info!("imported {}x{} project", width, height);
    Ok(imported)
}

fn dimension(object: &Map<String, Value>, key: &'static str, alias: &'static str) -> Result<u64, ImportError> {
    let (name, value) = match (object.get(key), object.get(alias)) {
        (Some(value), _) => (key, value),
        (None, Some(value)) => (alias, value),
        (None, None) => return Err(ImportError::MissingField(alias)),
    };
    value.as_u64().ok_or_else(|| ImportError::InvalidField {
        field: name,
        reason: format!("expected a positive integer, found {value}"),
    })
}

fn check_dimensions(width: u64, height: u64) -> Result<(), ImportError> {
    let valid = 1..=MAX_IMPORT_DIMENSION;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(ImportError::InvalidDimensions { width, height })
    }
}

fn field<T: serde::de::DeserializeOwned>(value: &Value, name: &'static str) -> Result<T, ImportError> {
    T::deserialize(value).map_err(|err| ImportError::InvalidField {
        field: name,
        reason: err.to_string(),
    })
}
