//! Minimal string-built SVG tree.
//!
//! Every layout component returns an [`SvgFragment`]; the composite renderer
//! and the print assembler compose fragments at the data level and serialize
//! exactly once. Nothing in this crate re-parses generated markup.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::RenderError;

/// An ordered list of SVG element strings, possibly wrapped in a `<g>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgFragment {
    elements: Vec<String>,
}

impl SvgFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: String) {
        self.elements.push(element);
    }

    pub fn push_str(&mut self, element: &str) {
        self.elements.push(element.to_string());
    }

    /// Append a child fragment wrapped in a group with the given attributes
    /// (e.g. `transform="translate(20, 0)"` or `class="voc-column"`).
    pub fn push_group(&mut self, attrs: &str, child: SvgFragment) {
        if attrs.is_empty() {
            self.elements.push("<g>".to_string());
        } else {
            self.elements.push(format!("<g {}>", attrs));
        }
        self.elements.extend(child.elements);
        self.elements.push("</g>".to_string());
    }

    pub fn append(&mut self, other: SvgFragment) {
        self.elements.extend(other.elements);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize one element per line with a two-space indent.
    pub fn write_into(&self, out: &mut String) {
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
    }
}

/// A complete SVG document of fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub content: SvgFragment,
}

impl SvgDocument {
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = num(self.width),
            h = num(self.height)
        ));
        self.content.write_into(&mut out);
        out.push_str("</svg>\n");
        out
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let mut file = File::create(path)?;
        file.write_all(self.serialize().as_bytes())?;
        Ok(())
    }
}

/// Deterministic float formatting: integral values print without a trailing
/// `.0`, everything else with Rust's shortest round-trip form.
pub fn num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
