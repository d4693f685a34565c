use super::ExportError;
use crate::document::Document;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

fn rasterize(document: &Document, scale: u32) -> Result<Pixmap, ExportError> {
    let scale = scale.max(1);
    let dims = |cells: usize| u32::try_from(cells).ok().and_then(|c| c.checked_mul(scale));
    let invalid = || ExportError::InvalidDimensions {
        width: document.width() as u64 * u64::from(scale),
        height: document.height() as u64 * u64::from(scale),
    };
    let (Some(width), Some(height)) = (dims(document.width()), dims(document.height())) else {
        return Err(invalid());
    };
    let mut pixmap = Pixmap::new(width, height).ok_or_else(invalid)?;
    let cell = scale as f32;

    let mut paint = Paint::default();
    paint.anti_alias = false;
    for (pos, color) in document.grid.painted() {
        let Some(rect) = Rect::from_xywh(pos.x as f32 * cell, pos.y as f32 * cell, cell, cell) else {
            continue;
        };
        paint.set_color_rgba8(color.r, color.g, color.b, color.alpha_u8());
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    paint.anti_alias = true;
    for path in document.overlay.paths() {
        let Some((first, rest)) = path.points.split_first() else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let centre = |v: i32| (v as f32 + 0.5) * cell;
        let mut builder = PathBuilder::new();
        builder.move_to(centre(first.x), centre(first.y));
        for p in rest {
            builder.line_to(centre(p.x), centre(p.y));
        }
        let Some(line) = builder.finish() else {
            continue;
        };
        let stroke = Stroke {
            width: path.stroke_width() * cell,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        paint.set_color_rgba8(path.color.r, path.color.g, path.color.b, path.color.alpha_u8());
        pixmap.stroke_path(&line, &paint, &stroke, Transform::identity(), None);
    }
    Ok(pixmap)
}

/// Straight-alpha RGBA image, `scale` pixels per cell. Unpainted cells are
/// fully transparent.
pub fn render_rgba(document: &Document, scale: u32) -> Result<RgbaImage, ExportError> {
    let pixmap = rasterize(document, scale)?;
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(ExportError::InvalidDimensions {
        width: u64::from(pixmap.width()),
        height: u64::from(pixmap.height()),
    })
}

pub fn encode_png(document: &Document, scale: u32) -> Result<Vec<u8>, ExportError> {
    let image = render_rgba(document, scale)?;
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)?;
    Ok(bytes)
}

/// JPEG has no alpha channel, so the image is flattened onto black first.
pub fn encode_jpeg(document: &Document, scale: u32, quality: u8) -> Result<Vec<u8>, ExportError> {
    let pixmap = rasterize(document, scale)?;
    // Premultiplied colour is exactly the colour composited over black.
    let rgb: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| [p.red(), p.green(), p.blue()])
        .collect();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).write_image(
        &rgb,
        pixmap.width(),
        pixmap.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}
