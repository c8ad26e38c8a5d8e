use crate::core::{Canvas, Result, Shape, Storage};
use std::fmt::Write as _;

/// Writes the drawing as an SVG document through a [`Storage`].
pub struct SvgCanvas<S: Storage> {
    storage: S,
    path: String,
    width: u32,
    height: u32,
    body: String,
}

impl<S: Storage> SvgCanvas<S> {
    pub fn new(storage: S, path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            storage,
            path: path.into(),
            width,
            height,
            body: String::new(),
        }
    }

    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"white\"/>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl<S: Storage> Canvas for SvgCanvas<S> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        // 寫入 String 不會失敗
        let _ = match shape {
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                fill,
            } => writeln!(
                self.body,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                x0,
                y0,
                x1 - x0,
                y1 - y0,
                fill.name()
            ),
            Shape::Text {
                x,
                y,
                content,
                color,
                size,
                bold,
            } => writeln!(
                self.body,
                "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\" font-weight=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
                x,
                y,
                color.name(),
                size,
                if *bold { "bold" } else { "normal" },
                escape_xml(content)
            ),
        };
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let document = self.document();
        self.storage.write_file(&self.path, document.as_bytes())?;
        tracing::info!("Histogram written to {}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::domain::model::Color;
    use tempfile::TempDir;

    #[test]
    fn test_svg_document_contains_shapes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let mut canvas = SvgCanvas::new(storage, "chart.svg", 800, 600);

        canvas
            .draw(&Shape::Rect {
                x0: 162.5,
                y0: 100.0,
                x1: 262.5,
                y1: 450.0,
                fill: Color::Green,
            })
            .unwrap();
        canvas
            .draw(&Shape::Text {
                x: 150.0,
                y: 50.0,
                content: "A & B".to_string(),
                color: Color::Black,
                size: 18,
                bold: true,
            })
            .unwrap();
        canvas.present().unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join("chart.svg")).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(written.contains(
            "<rect x=\"162.5\" y=\"100\" width=\"100\" height=\"350\" fill=\"green\"/>"
        ));
        assert!(written.contains("font-weight=\"bold\""));
        assert!(written.contains(">A &amp; B</text>"));
        assert!(written.trim_end().ends_with("</svg>"));
    }
}
