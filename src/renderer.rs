// src/renderer.rs
use crate::color::Rgba;
use crate::document::Document;
use crate::geometry::GridPos;
use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

/// Colours the canvas is drawn with, per theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTheme {
    pub background: Color32,
    pub grid_line: Color32,
}

impl CanvasTheme {
    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: Color32::from_gray(24),
                grid_line: Color32::from_white_alpha(24),
            }
        } else {
            Self {
                background: Color32::from_gray(250),
                grid_line: Color32::from_black_alpha(28),
            }
        }
    }
}

/// What to draw besides the document itself.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView<'a> {
    pub show_grid: bool,
    pub preview: &'a [GridPos],
    pub preview_color: Rgba,
}

#[derive(Debug)]
pub struct Renderer {
    theme: CanvasTheme,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.alpha_u8())
}

impl Renderer {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            theme: CanvasTheme::for_dark_mode(dark_mode),
        }
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.theme = CanvasTheme::for_dark_mode(dark);
    }

    pub fn theme(&self) -> CanvasTheme {
        self.theme
    }

    fn cell_rect(rect: Rect, cell: egui::Vec2, pos: GridPos) -> Rect {
        Rect::from_min_size(
            rect.min + egui::vec2(pos.x as f32 * cell.x, pos.y as f32 * cell.y),
            cell,
        )
    }

    /// Paints `document` into `rect`, stretched so every cell has the same size.
    ///
    /// Order: background, cells, preview, overlay strokes, grid lines.
    pub fn render(&self, painter: &egui::Painter, rect: Rect, document: &Document, view: &CanvasView<'_>) {
        let (w, h) = (document.width(), document.height());
        let cell = egui::vec2(rect.width() / w as f32, rect.height() / h as f32);

        painter.rect_filled(rect, 0.0, self.theme.background);

        for (pos, color) in document.grid.painted() {
            painter.rect_filled(Self::cell_rect(rect, cell, pos), 0.0, to_color32(color));
        }

        // Translucent so the cells underneath stay readable.
        let preview = to_color32(view.preview_color.with_alpha(view.preview_color.a * 0.6));
        for &pos in view.preview {
            if document.grid.contains(pos.x, pos.y) {
                painter.rect_filled(Self::cell_rect(rect, cell, pos), 0.0, preview);
            }
        }

        let centre = |p: &GridPos| Pos2::new(rect.min.x + (p.x as f32 + 0.5) * cell.x, rect.min.y + (p.y as f32 + 0.5) * cell.y);
        for path in document.overlay.paths() {
            let stroke = Stroke::new(path.stroke_width(), to_color32(path.color));
            match path.points.as_slice() {
                [] => {}
                [only] => {
                    painter.circle_filled(centre(only), path.stroke_width() / 2.0, stroke.color);
                }
                points => {
                    painter.add(egui::Shape::line(points.iter().map(centre).collect(), stroke));
                }
            }
        }

        if view.show_grid {
            let stroke = Stroke::new(1.0, self.theme.grid_line);
            for x in 0..=w {
                let x = rect.min.x + x as f32 * cell.x;
                painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
            }
            for y in 0..=h {
                let y = rect.min.y + y as f32 * cell.y;
                painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::new(false);
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        let mut document = Document::new(4, 4);
        document.grid.set(1, 1, Some(Rgba::WHITE));
        document.overlay.begin_stroke(GridPos::new(0, 0), Rgba::BLACK, 2.0);
        let preview = [GridPos::new(2, 2), GridPos::new(9, 9)];
        let view = CanvasView {
            show_grid: true,
            preview: &preview,
            preview_color: Rgba::WHITE,
        };
        renderer.render(&painter, rect, &document, &view);
    }

    #[test]
    fn color_conversion_keeps_alpha() {
        let c = to_color32(Rgba::new(255, 0, 0, 0.5));
        assert_eq!(c.a(), 128);
    }

    #[test]
    fn theme_follows_mode() {
        let mut renderer = Renderer::new(true);
        let dark = renderer.theme();
        renderer.set_dark_mode(false);
        assert_ne!(renderer.theme(), dark);
    }
}
