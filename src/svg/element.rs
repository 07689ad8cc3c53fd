//! Primitive SVG elements: axes, bars, and text labels.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Label positions are fractions of the axis length, measured from the origin.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::named("black"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::named("black"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        // Main axis line
        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let escaped_label = xml_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    /// Text shown in the hover tooltip after the label.
    pub value_text: String,
    /// Id of a `<clipPath>` restricting the bar to the plot area.
    pub clip_path: Option<String>,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = xml_escape(&self.label);
        let escaped_value = xml_escape(&self.value_text);
        let clip = self
            .clip_path
            .as_ref()
            .map(|id| format!(r#" clip-path="url(#{})""#, xml_escape(id)))
            .unwrap_or_default();
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}"{clip}>
    <title>{escaped_label}: {escaped_value}</title>
</rect>"#,
            self.x, self.y, self.width, self.height
        )
    }
}

/// Free-standing text such as titles and value annotations.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
    /// Rotation in degrees around `(x, y)`.
    pub rotation: Option<f64>,
    /// Extra CSS class, used to tell annotation kinds apart.
    pub class: Option<String>,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Middle,
            font_size: 10.0,
            color: ChartColor::named("black"),
            rotation: None,
            class: None,
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut attributes = String::new();
        if let Some(class) = &self.class {
            let _ = write!(attributes, r#" class="{}""#, xml_escape(class));
        }
        if let Some(degrees) = self.rotation {
            let _ = write!(
                attributes,
                r#" transform="rotate({degrees} {} {})""#,
                self.x, self.y
            );
        }
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{attributes}>{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            xml_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
