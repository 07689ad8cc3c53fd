//! Presenting a rendered chart to an output target.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::svg::MetricsBarChart;

/// Render `chart` and write the SVG document, newline-terminated, to `writer`.
///
/// # Errors
/// Returns an error if rendering fails or the writer rejects the output.
pub fn present<W: Write>(chart: &MetricsBarChart, writer: &mut W) -> Result<()> {
    let document = chart.render_document()?;
    writer.write_all(document.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(bytes = document.len() + 1, "presented chart");
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
