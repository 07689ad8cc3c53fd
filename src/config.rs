//! Fixed presentation settings for the performance chart.

use serde::{Deserialize, Serialize};

use crate::svg::ChartColor;

/// Figure size, fonts, labels and palette used to lay out the chart.
///
/// Dimensions are SVG user units; the default 800 x 600 figure matches an
/// 8 x 6 inch canvas at 100 dpi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,

    pub width: f64,
    pub height: f64,
    /// Outer padding kept free around all text.
    pub padding: f64,

    pub title_font_size: f64,
    pub axis_title_font_size: f64,
    pub tick_font_size: f64,
    pub annotation_font_size: f64,

    /// Y-axis range. Fixed; never derived from the data.
    pub y_min: f64,
    pub y_max: f64,
    pub y_tick_step: f64,

    /// Fraction of each slot covered by its bar.
    pub bar_width_ratio: f64,
    /// Gap between a bar top and its annotation baseline, in data units.
    pub annotation_offset: f64,
    /// Decimal digits shown in bar annotations.
    pub annotation_precision: usize,

    /// Bar fills, cycled when there are more bars than colors.
    pub palette: Vec<ChartColor>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Performance Metrics".to_string(),
            x_axis_title: "Metrics".to_string(),
            y_axis_title: "Score".to_string(),
            width: 800.0,
            height: 600.0,
            padding: 10.0,
            title_font_size: 16.0,
            axis_title_font_size: 14.0,
            tick_font_size: 10.0,
            annotation_font_size: 12.0,
            y_min: 0.0,
            y_max: 1.0,
            y_tick_step: 0.2,
            bar_width_ratio: 0.8,
            annotation_offset: 0.01,
            annotation_precision: 3,
            palette: vec![
                ChartColor::named("blue"),
                ChartColor::named("orange"),
                ChartColor::named("green"),
                ChartColor::named("red"),
            ],
        }
    }
}

impl ChartConfig {
    /// Fill color for the bar at `index`.
    ///
    /// Falls back to black when the palette is empty.
    #[must_use]
    pub fn bar_color(&self, index: usize) -> ChartColor {
        if self.palette.is_empty() {
            return ChartColor::named("black");
        }
        self.palette[index % self.palette.len()].clone()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
