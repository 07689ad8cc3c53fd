use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfChartError {
    #[error("Failed to write chart output: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PerfChartError {
    /// Short category name used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, PerfChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
