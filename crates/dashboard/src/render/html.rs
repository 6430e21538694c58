// File: crates/dashboard/src/render/html.rs
// Summary: Minimal HTML markup writer; every text and attribute value is escaped.

use std::fmt::Write as _;

use chart_core::svg::escape_xml;

/// Append-only HTML builder. Writes into a `String`, so formatting never fails.
#[derive(Default)]
pub struct HtmlWriter {
    buf: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)], self_closing: bool) {
        let _ = write!(self.buf, "<{tag}");
        for (name, value) in attrs {
            let _ = write!(self.buf, r#" {name}="{}""#, escape_xml(value));
        }
        self.buf.push_str(if self_closing { "/>" } else { ">" });
    }

    /// `<tag class="..">`; an empty class is omitted.
    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        if class.is_empty() {
            self.start_tag(tag, &[], false);
        } else {
            self.start_tag(tag, &[("class", class)], false);
        }
        self
    }

    pub fn open_with(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, false);
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_xml(text));
        self
    }

    /// Insert trusted markup (e.g. a rendered chart) verbatim.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// `<tag class="..">text</tag>`
    pub fn leaf(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close(tag)
    }

    /// Self-closing element such as `<input/>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, true);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
