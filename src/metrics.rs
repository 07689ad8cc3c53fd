//! Performance metric samples plotted by the chart.

use std::fmt;

use serde::Serialize;

/// Classifier performance measure shown as one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Accuracy,
    Precision,
    Recall,
    F1Score,
}

impl Metric {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::F1Score => "F1 Score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A metric paired with its score, nominally in `[0, 1]`.
///
/// The range is not validated; the chart's fixed y-axis is the only bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSample {
    pub metric: Metric,
    pub value: f64,
}

impl MetricSample {
    #[must_use]
    pub const fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.metric.label()
    }
}

/// Scores of the evaluated classifier.
pub const PERFORMANCE_METRICS: [MetricSample; 4] = [
    MetricSample::new(Metric::Accuracy, 0.884),
    MetricSample::new(Metric::Precision, 0.880_952_380_952_380_9),
    MetricSample::new(Metric::Recall, 0.888),
    MetricSample::new(Metric::F1Score, 0.884_462_151_394_422_3),
];

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
