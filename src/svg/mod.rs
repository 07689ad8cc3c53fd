//! SVG chart generation.
//!
//! Provides building blocks for standalone SVG figures:
//! - viewBox-based scaling (renders at any size)
//! - precomputed layout, embedded as JSON in `<metadata>`
//! - Accessibility: `<title>` elements for screen readers

mod builder;
mod chart;
mod data;
mod element;
mod format;
mod layout;
mod style;

pub use builder::SvgBuilder;
pub use chart::MetricsBarChart;
pub use data::DataPoint;
pub use element::{Axis, AxisOrientation, Bar, Label, SvgElement};
pub use format::{format_value, xml_escape};
pub use layout::{AxisRange, BarGeometry, ChartBox, ChartLayout, TextPlacement, Tick};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
