#![allow(dead_code)]

/// Creates an `assert_cmd` Command for the perf-chart binary.
#[macro_export]
macro_rules! perf_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("perf-chart"))
    };
}

/// Runs the binary and returns its stdout as a string.
pub fn rendered_stdout() -> String {
    let output = perf_chart!().output().expect("Failed to run perf-chart");
    assert!(
        output.status.success(),
        "perf-chart exited with {}",
        output.status
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

/// Texts of the value annotations drawn above the bars, in document order.
pub fn annotation_texts(svg: &str) -> Vec<String> {
    svg.lines()
        .filter(|line| line.contains(r#"class="bar-value""#))
        .filter_map(|line| {
            let start = line.find('>')? + 1;
            let end = line.find("</text>")?;
            Some(line[start..end].to_string())
        })
        .collect()
}
