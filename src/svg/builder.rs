//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::xml_escape;

/// Builder for standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    metadata: Option<String>,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            metadata: None,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach machine-readable content to the `<metadata>` element.
    #[must_use]
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Add a `<clipPath>` definition covering the given rectangle.
    #[must_use]
    pub fn push_clip_rect(mut self, id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.defs.push(format!(
            r#"<clipPath id="{}"><rect x="{x}" y="{y}" width="{width}" height="{height}"/></clipPath>"#,
            xml_escape(id)
        ));
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height, self.width, self.height
        );

        // <title> as first child provides the accessible name
        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if let Some(metadata) = &self.metadata {
            let escaped = xml_escape(metadata);
            let _ = writeln!(output, r"    <metadata>{escaped}</metadata>");
        }

        if !self.defs.is_empty() {
            output.push_str("    <defs>\n");
            for def in &self.defs {
                let _ = writeln!(output, "        {def}");
            }
            output.push_str("    </defs>\n");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
