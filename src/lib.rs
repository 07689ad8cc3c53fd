pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod svg;

pub use config::ChartConfig;
pub use error::{PerfChartError, Result};
pub use metrics::{Metric, MetricSample, PERFORMANCE_METRICS};
pub use svg::MetricsBarChart;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
