//! Vertical bar chart of performance metrics.

use serde::Serialize;
use tracing::debug;

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Axis, Bar, Label};
use super::layout::{ChartLayout, TextPlacement};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::metrics::{MetricSample, PERFORMANCE_METRICS};

/// Id of the clip path that keeps bars inside the plot area.
const PLOT_CLIP_ID: &str = "plot-area";

/// Bar chart with one annotated bar per data point and a fixed y range.
#[derive(Debug, Clone)]
pub struct MetricsBarChart {
    pub data: Vec<DataPoint>,
    pub config: ChartConfig,
}

/// Structure embedded in the document's `<metadata>`.
#[derive(Serialize)]
struct ChartMetadata<'a> {
    config: &'a ChartConfig,
    layout: &'a ChartLayout,
}

impl MetricsBarChart {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            config: ChartConfig::default(),
        }
    }

    #[must_use]
    pub fn from_samples(samples: &[MetricSample]) -> Self {
        Self::new(samples.iter().map(DataPoint::from).collect())
    }

    /// Chart of the classifier's recorded scores.
    #[must_use]
    pub fn performance() -> Self {
        Self::from_samples(&PERFORMANCE_METRICS)
    }

    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::compute(&self.data, &self.config)
    }

    /// Render a standalone SVG document.
    ///
    /// # Errors
    /// Returns an error if the layout metadata cannot be serialized.
    pub fn render_document(&self) -> Result<String> {
        let layout = self.layout();
        let metadata = serde_json::to_string(&ChartMetadata {
            config: &self.config,
            layout: &layout,
        })?;

        let mut svg = SvgBuilder::new(layout.width, layout.height)
            .with_title(layout.title.text.clone())
            .with_metadata(metadata)
            .push_raw(format!(
                r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
                layout.width, layout.height
            ));

        if layout.is_empty() {
            svg = svg.push_element(&text_label(&layout.title, "chart-title")).push_element(
                &Label::new(layout.width / 2.0, layout.height / 2.0, "No data available")
                    .with_font_size(self.config.axis_title_font_size)
                    .with_class("empty-state"),
            );
            debug!("rendered empty chart");
            return Ok(svg.build());
        }

        let plot = layout.plot;
        svg = svg.push_clip_rect(PLOT_CLIP_ID, plot.x, plot.y, plot.w, plot.h);

        for (bar, annotation) in layout.bars.iter().zip(&layout.annotations) {
            svg = svg.push_element(&Bar {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                color: bar.color.clone(),
                label: bar.label.clone(),
                value_text: annotation.text.clone(),
                clip_path: Some(PLOT_CLIP_ID.to_string()),
            });
        }

        // Plot frame
        svg = svg.push_raw(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
            plot.x, plot.y, plot.w, plot.h
        ));

        let y_axis = Axis::vertical(plot.x, plot.bottom(), plot.h)
            .with_font_size(layout.tick_font_size)
            .with_labels(
                layout
                    .y_ticks
                    .iter()
                    .map(|tick| (tick.position, tick.label.clone()))
                    .collect(),
            );
        let x_axis = Axis::horizontal(plot.x, plot.bottom(), plot.w)
            .with_font_size(layout.tick_font_size)
            .with_labels(
                layout
                    .x_ticks
                    .iter()
                    .map(|tick| (tick.position, tick.label.clone()))
                    .collect(),
            );
        svg = svg.push_element(&y_axis).push_element(&x_axis);

        for annotation in &layout.annotations {
            svg = svg.push_element(&text_label(annotation, "bar-value"));
        }

        svg = svg
            .push_element(&text_label(&layout.title, "chart-title"))
            .push_element(&text_label(&layout.x_axis_title, "axis-title"))
            .push_element(&text_label(&layout.y_axis_title, "axis-title").with_rotation(-90.0));

        let document = svg.build();
        debug!(
            bars = layout.bars.len(),
            bytes = document.len(),
            "rendered chart document"
        );
        Ok(document)
    }
}

fn text_label(placement: &TextPlacement, class: &str) -> Label {
    Label::new(placement.x, placement.y, placement.text.clone())
        .with_font_size(placement.font_size)
        .with_class(class)
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
