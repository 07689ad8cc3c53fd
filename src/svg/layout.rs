//! Chart geometry: plot box, bars, ticks and text placement.
//!
//! Layout is computed up front so rendering is a straight walk over the
//! result, and so the structure of a chart can be inspected without parsing
//! SVG. Margins are sized from font sizes and tick label extents ("tight
//! layout") so no text is clipped by the figure edge.

use serde::Serialize;
use tracing::{debug, trace};

use super::data::DataPoint;
use super::format::format_value;
use super::style::ChartColor;
use crate::config::ChartConfig;

/// Length of axis tick marks.
pub const TICK_LENGTH: f64 = 5.0;
/// Space between neighbouring text blocks.
const LABEL_GAP: f64 = 6.0;
/// Gap between a vertical tick and its label, matching `Axis`.
const Y_TICK_LABEL_GAP: f64 = 4.0;
/// Gap between a horizontal tick and its label baseline, matching `Axis`.
const X_TICK_LABEL_GAP: f64 = 2.0;
/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Decimal digits on y-axis tick labels.
const TICK_PRECISION: usize = 1;

/// Axis-aligned rectangle in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ChartBox {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.w.mul_add(0.5, self.x)
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.h.mul_add(0.5, self.y)
    }
}

/// Closed value range shown along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Width of the range; a degenerate range is treated as one unit wide.
    #[must_use]
    pub fn span(&self) -> f64 {
        if self.max > self.min {
            self.max - self.min
        } else {
            1.0
        }
    }

    /// Position of `value` as a fraction of the range.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Labelled tick; `position` is a fraction of the axis length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Text placed at a baseline anchor point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// One bar: the plotted value and its rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width.mul_add(0.5, self.x)
    }
}

/// Fully resolved chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: ChartBox,
    pub y_range: AxisRange,
    pub title: TextPlacement,
    pub x_axis_title: TextPlacement,
    pub y_axis_title: TextPlacement,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub tick_font_size: f64,
    pub bars: Vec<BarGeometry>,
    pub annotations: Vec<TextPlacement>,
}

impl ChartLayout {
    /// Lay out one bar per point, in input order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // bar counts are tiny
    pub fn compute(points: &[DataPoint], config: &ChartConfig) -> Self {
        let y_range = AxisRange {
            min: config.y_min,
            max: config.y_max,
        };
        let y_ticks = compute_y_ticks(y_range, config.y_tick_step);
        let plot = compute_plot_box(config, &y_ticks);

        let bar_count = points.len();
        let slot_width = if bar_count == 0 {
            0.0
        } else {
            plot.w / bar_count as f64
        };
        let bar_width = slot_width * config.bar_width_ratio;
        let to_pixel = |value: f64| y_range.fraction(value).mul_add(-plot.h, plot.bottom());
        let baseline_y = to_pixel(y_range.clamp(0.0));
        let annotation_lift = config.annotation_offset / y_range.span() * plot.h;

        let mut x_ticks = Vec::with_capacity(bar_count);
        let mut bars = Vec::with_capacity(bar_count);
        let mut annotations = Vec::with_capacity(bar_count);

        for (i, point) in points.iter().enumerate() {
            let center_x = slot_width.mul_add(i as f64 + 0.5, plot.x);

            let (y, height) = if point.value.is_finite() {
                let top = to_pixel(point.value);
                (top.min(baseline_y), (baseline_y - top).abs())
            } else {
                (baseline_y, 0.0)
            };

            let annotation_y = if point.value.is_finite() {
                to_pixel(point.value + config.annotation_offset)
            } else {
                baseline_y - annotation_lift
            };

            let bar = BarGeometry {
                label: point.label.clone(),
                value: point.value,
                color: point.color.clone().unwrap_or_else(|| config.bar_color(i)),
                x: center_x - bar_width / 2.0,
                y,
                width: bar_width,
                height,
            };
            trace!(
                label = %bar.label,
                value = bar.value,
                x = bar.x,
                y = bar.y,
                height = bar.height,
                "bar geometry"
            );

            x_ticks.push(Tick {
                position: (i as f64 + 0.5) / bar_count as f64,
                label: point.label.clone(),
            });
            annotations.push(TextPlacement {
                text: format_value(point.value, config.annotation_precision),
                x: center_x,
                y: annotation_y,
                font_size: config.annotation_font_size,
            });
            bars.push(bar);
        }

        debug!(
            bars = bars.len(),
            plot_x = plot.x,
            plot_y = plot.y,
            plot_w = plot.w,
            plot_h = plot.h,
            "computed chart layout"
        );

        Self {
            width: config.width,
            height: config.height,
            plot,
            y_range,
            title: TextPlacement {
                text: config.title.clone(),
                x: plot.center_x(),
                y: config.padding + config.title_font_size,
                font_size: config.title_font_size,
            },
            x_axis_title: TextPlacement {
                text: config.x_axis_title.clone(),
                x: plot.center_x(),
                y: config.height - config.padding,
                font_size: config.axis_title_font_size,
            },
            y_axis_title: TextPlacement {
                text: config.y_axis_title.clone(),
                x: config.padding + config.axis_title_font_size,
                y: plot.center_y(),
                font_size: config.axis_title_font_size,
            },
            x_ticks,
            y_ticks,
            tick_font_size: config.tick_font_size,
            bars,
            annotations,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Evenly spaced ticks from `range.min` to `range.max`.
///
/// A non-positive step yields ticks at the two ends only.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn compute_y_ticks(range: AxisRange, step: f64) -> Vec<Tick> {
    let tick = |value: f64| Tick {
        position: range.fraction(value),
        label: format_value(value, TICK_PRECISION),
    };

    if step.is_nan() || step <= 0.0 || range.max <= range.min {
        return vec![tick(range.min), tick(range.max)];
    }

    let intervals = ((range.max - range.min) / step + 1e-9).floor() as usize;
    (0..=intervals)
        .map(|i| tick(step.mul_add(i as f64, range.min)))
        .collect()
}

/// Plot area left over after reserving room for every text block.
#[allow(clippy::cast_precision_loss)]
fn compute_plot_box(config: &ChartConfig, y_ticks: &[Tick]) -> ChartBox {
    let widest_tick_label = y_ticks
        .iter()
        .map(|tick| tick.label.chars().count())
        .max()
        .unwrap_or(0);
    let tick_labels_width = widest_tick_label as f64 * config.tick_font_size * CHAR_WIDTH_RATIO;

    let left = config.padding
        + config.axis_title_font_size
        + LABEL_GAP
        + tick_labels_width
        + Y_TICK_LABEL_GAP
        + TICK_LENGTH;
    // Headroom for annotations above bars that reach the top of the range.
    let top = config.padding + config.title_font_size + LABEL_GAP + config.annotation_font_size;
    let bottom = TICK_LENGTH
        + X_TICK_LABEL_GAP
        + config.tick_font_size
        + LABEL_GAP
        + config.axis_title_font_size
        + config.padding;
    let right = config.padding;

    ChartBox {
        x: left,
        y: top,
        w: (config.width - left - right).max(0.0),
        h: (config.height - top - bottom).max(0.0),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
