//! User-adjustable editor settings, persisted between sessions.

use crate::color::Rgba;
use crate::export::ExportOptions;
use crate::tools::ToolSettings;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const DEFAULT_GRID_SIZE: usize = 40;
pub const GRID_SIZE_RANGE: RangeInclusive<usize> = 4..=256;

/// On-screen size of one cell, in points.
pub const DEFAULT_ZOOM: f32 = 40.0;
pub const ZOOM_RANGE: RangeInclusive<f32> = 4.0..=40.0;
pub const ZOOM_STEP: f32 = 2.0;

pub const DEFAULT_COLOR: &str = "#ff66cc";
pub const ACCENT_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=6.0;
pub const EXPORT_SCALE_RANGE: RangeInclusive<u32> = 1..=64;
pub const DEFAULT_PROJECT_NAME: &str = "My Pixel Pet";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub zoom: f32,
    pub show_grid: bool,
    pub fill_shapes: bool,
    /// `#rrggbb`
    pub color: String,
    pub alpha: f32,
    pub accent_width: f32,
    pub dark_mode: bool,
    pub project_name: String,
    /// Maximum undo depth. `None` is unbounded.
    pub history_limit: Option<usize>,
    pub export_scale: u32,
    pub jpeg_quality: u8,
    /// Where native builds keep saved projects and exports.
    pub data_dir: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            zoom: DEFAULT_ZOOM,
            show_grid: true,
            fill_shapes: false,
            color: DEFAULT_COLOR.to_owned(),
            alpha: 1.0,
            accent_width: 1.0,
            dark_mode: true,
            project_name: DEFAULT_PROJECT_NAME.to_owned(),
            history_limit: None,
            export_scale: 1,
            jpeg_quality: 90,
            data_dir: PathBuf::from("pixel_paint_data"),
        }
    }
}

impl EditorSettings {
    /// Pulls every value back into range. Settings come from storage written
    /// by older builds or edited by hand.
    pub fn sanitized(mut self) -> Self {
        self.grid_width = self.grid_width.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self.grid_height = self.grid_height.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self.zoom = clamp_f32(self.zoom, &ZOOM_RANGE, DEFAULT_ZOOM);
        self.alpha = clamp_f32(self.alpha, &(0.0..=1.0), 1.0);
        self.accent_width = clamp_f32(self.accent_width, &ACCENT_WIDTH_RANGE, 1.0);
        self.export_scale = self.export_scale.clamp(*EXPORT_SCALE_RANGE.start(), *EXPORT_SCALE_RANGE.end());
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        // A zero-depth history could never undo; treat it as unlimited.
        self.history_limit = self.history_limit.filter(|&limit| limit > 0);
        self.color = Rgba::from_hex(&self.color, 1.0).to_hex();
        self
    }

    pub fn active_color(&self) -> Rgba {
        Rgba::from_hex(&self.color, self.alpha)
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            color: self.active_color(),
            fill_shapes: self.fill_shapes,
            accent_width: self.accent_width,
        }
    }

    /// Copies the live tool settings back, e.g. after the picker changed colour.
    pub fn capture_tool_settings(&mut self, tools: &ToolSettings) {
        self.color = tools.color.to_hex();
        self.alpha = tools.color.a;
        self.fill_shapes = tools.fill_shapes;
        self.accent_width = tools.accent_width;
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            scale: self.export_scale,
            jpeg_quality: self.jpeg_quality,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(*ZOOM_RANGE.end());
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(*ZOOM_RANGE.start());
    }
}

fn clamp_f32(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
