use std::io;

use tracing_subscriber::EnvFilter;

use perf_chart::output::present;
use perf_chart::{EXIT_RENDER_ERROR, EXIT_SUCCESS, MetricsBarChart};

fn init_logging() {
    // stdout carries the figure; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let chart = MetricsBarChart::performance();
    let exit_code = match present(&chart, &mut io::stdout().lock()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error ({}): {e}", e.error_type());
            EXIT_RENDER_ERROR
        }
    };

    std::process::exit(exit_code);
}
