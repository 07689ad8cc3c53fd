//! Integration tests for the rendered performance chart.

mod common;

use common::{annotation_texts, rendered_stdout};
use predicates::prelude::*;

#[test]
fn renders_svg_document_to_stdout() {
    perf_chart!()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::ends_with("</svg>\n"));
}

#[test]
fn stderr_is_quiet_by_default() {
    perf_chart!()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_logging_goes_to_stderr() {
    perf_chart!()
        .env("RUST_LOG", "perf_chart=debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stderr(predicate::str::contains("computed chart layout"));
}

#[test]
fn chart_has_four_bars_in_order() {
    let svg = rendered_stdout();
    assert_eq!(svg.matches(r#"clip-path="url(#plot-area)""#).count(), 4);

    let accuracy = svg.find("<title>Accuracy: ").unwrap();
    let precision = svg.find("<title>Precision: ").unwrap();
    let recall = svg.find("<title>Recall: ").unwrap();
    let f1 = svg.find("<title>F1 Score: ").unwrap();
    assert!(accuracy < precision && precision < recall && recall < f1);
}

#[test]
fn annotations_have_three_decimals() {
    let svg = rendered_stdout();
    assert_eq!(
        annotation_texts(&svg),
        ["0.884", "0.881", "0.888", "0.884"]
    );
}

#[test]
fn labels_and_titles_present() {
    perf_chart!()
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance Metrics"))
        .stdout(predicate::str::contains(">Metrics</text>"))
        .stdout(predicate::str::contains(">Score</text>"))
        .stdout(predicate::str::contains(">0.0</text>"))
        .stdout(predicate::str::contains(">1.0</text>"));
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(rendered_stdout(), rendered_stdout());
}

#[test]
fn ignores_stdin() {
    perf_chart!()
        .write_stdin("unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"));
}
