use crate::document::Document;
use crate::grid::PixelGrid;
use crate::overlay::OverlayPath;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    w: usize,
    h: usize,
    pixels: &'a PixelGrid,
    overlay_paths: &'a [OverlayPath],
}

/// Pretty-printed `{w, h, pixels, overlayPaths}`, accepted back by import.
pub fn to_json(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonExport {
        w: document.width(),
        h: document.height(),
        pixels: &document.grid,
        overlay_paths: document.overlay.paths(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::state::import_project;

    #[test]
    fn shape_and_reimport() {
        let mut document = Document::new(3, 2);
        document.grid.set(2, 1, Some(Rgba::new(4, 5, 6, 0.5)));
        let json = to_json(&document).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["w"], 3);
        assert_eq!(value["h"], 2);
        assert_eq!(value["pixels"][1][2]["a"], 0.5);
        assert!(value["overlayPaths"].as_array().unwrap().is_empty());

        assert_eq!(import_project(&json).unwrap().document, document);
    }
}
