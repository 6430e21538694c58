// File: crates/chart-core/src/svg.rs
// Summary: Minimal SVG markup writer used by the chart renderer.

use std::fmt::Write as _;

use crate::geometry::{fmt_num, points_attr};
use crate::types::{PlotBar, PlotPoint};

/// Escape text for XML/HTML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Append-only SVG document builder. Writes into a `String`, so formatting never fails.
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new(width: f64, height: f64, class: &str) -> Self {
        let mut buf = String::new();
        let _ = write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            escape_xml(class),
            w = fmt_num(width),
            h = fmt_num(height),
        );
        Self { buf }
    }

    pub fn title(&mut self, text: &str) {
        let _ = write!(self.buf, "<title>{}</title>", escape_xml(text));
    }

    pub fn background(&mut self, width: f64, height: f64, fill: &str) {
        let _ = write!(
            self.buf,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(width),
            fmt_num(height),
            fill
        );
    }

    /// Vertical two-stop gradient.
    pub fn linear_gradient(&mut self, id: &str, top: &str, bottom: &str, bottom_opacity: f32) {
        let _ = write!(
            self.buf,
            concat!(
                r#"<defs><linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
                r#"<stop offset="0%" stop-color="{top}" stop-opacity="1"/>"#,
                r#"<stop offset="100%" stop-color="{bottom}" stop-opacity="{op}"/>"#,
                "</linearGradient></defs>"
            ),
            id = escape_xml(id),
            top = top,
            bottom = bottom,
            op = fmt_num(bottom_opacity as f64),
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.buf,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            stroke,
            fmt_num(width)
        );
    }

    pub fn polyline(&mut self, points: &[PlotPoint], stroke: &str, width: f64) {
        let _ = write!(
            self.buf,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            points_attr(points),
            stroke,
            fmt_num(width)
        );
    }

    pub fn circle(&mut self, p: &PlotPoint, r: f64, fill: &str) {
        let _ = write!(
            self.buf,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(p.x),
            fmt_num(p.y),
            fmt_num(r),
            fill
        );
    }

    pub fn bar(&mut self, b: &PlotBar, fill: &str, corner: f64) {
        let _ = write!(
            self.buf,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{}"/>"#,
            fmt_num(b.x),
            fmt_num(b.y),
            fmt_num(b.width),
            fmt_num(b.height),
            fill,
            fmt_num(corner)
        );
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, fill: &str, anchor: &str, content: &str) {
        let _ = write!(
            self.buf,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" font-family="sans-serif">{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(size),
            fill,
            anchor,
            escape_xml(content)
        );
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}
