use super::to_json;
use crate::document::Document;

/// A self-contained HTML page: a canvas plus a script that paints the
/// embedded JSON export onto it.
pub fn to_html(document: &Document) -> Result<String, serde_json::Error> {
    // `</` inside a script block would end it early.
    let data = to_json(document)?.replace("</", "<\\/");
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Pixel Pet Snippet</title>
<style>body{{background:#0b0b12;margin:0;display:grid;place-items:center;height:100svh}}</style>
</head>
<body>
<canvas id="pixel-art" width="{w}" height="{h}" style="image-rendering:pixelated;width:{cw}px;height:{ch}px"></canvas>
<script>
(function () {{
  const data = {data};
  const ctx = document.getElementById("pixel-art").getContext("2d");
  data.pixels.forEach(function (row, y) {{
    row.forEach(function (c, x) {{
      if (!c) return;
      ctx.fillStyle = "rgba(" + c.r + "," + c.g + "," + c.b + "," + (c.a === undefined ? 1 : c.a) + ")";
      ctx.fillRect(x, y, 1, 1);
    }});
  }});
  data.overlayPaths.forEach(function (p) {{
    if (p.points.length < 2) return;
    ctx.strokeStyle = "rgba(" + p.color.r + "," + p.color.g + "," + p.color.b + "," + (p.color.a === undefined ? 1 : p.color.a) + ")";
    ctx.lineWidth = p.width || 1;
    ctx.lineCap = "round";
    ctx.lineJoin = "round";
    ctx.beginPath();
    p.points.forEach(function (pt, i) {{
      if (i === 0) ctx.moveTo(pt.x + 0.5, pt.y + 0.5); else ctx.lineTo(pt.x + 0.5, pt.y + 0.5);
    }});
    ctx.stroke();
  }});
}})();
</script>
</body>
</html>
"#,
        w = document.width(),
        h = document.height(),
        cw = document.width() * 8,
        ch = document.height() * 8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_data_and_canvas() {
        let html = to_html(&Document::new(3, 2)).unwrap();
        assert!(html.contains(r#"<canvas id="pixel-art" width="3" height="2""#));
        assert!(html.contains(r#""w": 3"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn is_a_complete_document() {
        let html = to_html(&Document::new(1, 1)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.contains(r#"<meta charset="utf-8"/>"#));
        assert!(html.trim_end().ends_with("</body>\n</html>"));
    }
}
