//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fill, stroke or text color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartColor {
    /// Direct hex color (e.g., "#1f77b4")
    Hex(String),
    /// SVG/CSS color keyword (e.g., "orange")
    Named(String),
}

impl ChartColor {
    /// Create a color from an SVG color keyword.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(value) | Self::Named(value) => value.clone(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
