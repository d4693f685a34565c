//! Encoders that turn a document into downloadable files.

mod html;
mod json;
mod raster;
mod svg;

use crate::document::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use html::to_html;
pub use json::to_json;
pub use raster::{encode_jpeg, encode_png, render_rgba};
pub use svg::to_svg;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image of {width}x{height} pixels cannot be rendered")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
    Json,
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::Svg,
        ExportFormat::Json,
        ExportFormat::Html,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Svg => "SVG",
            ExportFormat::Json => "JSON",
            ExportFormat::Html => "HTML snippet",
        }
    }
}

/// Knobs for the raster encoders. Text formats ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Output pixels per grid cell
    pub scale: u32,
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            jpeg_quality: 90,
        }
    }
}

/// Encodes `document` in `format`.
pub fn export(document: &Document, format: ExportFormat, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        ExportFormat::Png => encode_png(document, options.scale)?,
        ExportFormat::Jpeg => encode_jpeg(document, options.scale, options.jpeg_quality)?,
        ExportFormat::Svg => to_svg(document).into_bytes(),
        ExportFormat::Json => to_json(document)?.into_bytes(),
        ExportFormat::Html => to_html(document)?.into_bytes(),
    };
    log::debug!("exported {} ({} bytes)", format.label(), bytes.len());
    Ok(bytes)
}
