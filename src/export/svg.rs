use crate::document::Document;
use std::fmt::Write;

/// Vector rendering: one `<rect>` per painted cell, one `<path>` per overlay
/// stroke through the cell centres. One user unit per cell.
pub fn to_svg(document: &Document) -> String {
    let (w, h) = (document.width(), document.height());
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#
    );
    for (pos, color) in document.grid.painted() {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="1" height="1" fill="{}" fill-opacity="{}"/>"#,
            pos.x,
            pos.y,
            color.to_hex(),
            color.a
        );
    }
    for path in document.overlay.paths() {
        let Some((first, rest)) = path.points.split_first() else {
            continue;
        };
        let mut d = format!("M {} {}", f64::from(first.x) + 0.5, f64::from(first.y) + 0.5);
        for p in rest {
            let _ = write!(d, " L {} {}", f64::from(p.x) + 0.5, f64::from(p.y) + 0.5);
        }
        let _ = writeln!(
            out,
            r#"  <path d="{d}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            path.color.to_css(),
            path.stroke_width()
        );
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::GridPos;

    #[test]
    fn one_rect_per_painted_cell() {
        let mut document = Document::new(4, 4);
        document.grid.set(1, 2, Some(Rgba::rgb(255, 0, 0)));
        document.grid.set(3, 3, Some(Rgba::rgb(0, 0, 255)));
        let svg = to_svg(&document);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 4 4""#));
        assert!(svg.contains("crispEdges"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains(r##"<rect x="1" y="2" width="1" height="1" fill="#ff0000" fill-opacity="1"/>"##));
    }

    #[test]
    fn overlay_paths_pass_through_cell_centres() {
        let mut document = Document::new(4, 4);
        document.overlay.begin_stroke(GridPos::new(0, 0), Rgba::BLACK, 2.0);
        document.overlay.extend_current_stroke(GridPos::new(2, 1));
        let svg = to_svg(&document);
        assert!(svg.contains(r#"d="M 0.5 0.5 L 2.5 1.5""#));
        assert!(svg.contains(r#"stroke-width="2""#));
    }
}
