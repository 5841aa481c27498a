// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub const INSERT_LINE: &str = "Test Case '-[TendrilTreeTests.testInsert]' measured [Time, seconds] average: 0.003, relative standard deviation: 4.2%, values: [0.003, 0.003], performanceMetricID:com.apple.XCTPerformanceMetric_WallClockTime";

pub const XCODE_LOG: &str = r#"Test Suite 'Measurements' started at 2026-10-19 14:05:00.000.
Test Case '-[TendrilTreeTests.Measurements testInsert]' started.
Test Case '-[TendrilTreeTests.Measurements testInsert]' measured [Time, seconds] average: 0.003, relative standard deviation: 4.2%, values: [0.003, 0.003]
Test Case '-[TendrilTreeTests.Measurements testInsert]' passed (0.412 seconds).
Test Case '-[TendrilTreeTests.Measurements testDelete]' started.
Test Case '-[TendrilTreeTests.Measurements testDelete]' measured [Time, seconds] average: 0.010, relative standard deviation: 2.0%, values: [0.010, 0.010]
Test Case '-[TendrilTreeTests.Measurements testDelete]' passed (1.118 seconds).
Test Suite 'Measurements' passed at 2026-10-19 14:05:01.530.
"#;

/// Creates a scratch working directory.
pub fn setup_workspace() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `output` to a file and returns a test command that prints it.
pub fn fake_test_command(dir: &Path, output: &str) -> String {
    fs::write(dir.join("xcodebuild_output.txt"), output).expect("Failed to write fake output");
    "cat xcodebuild_output.txt".to_string()
}

/// Writes a `PerfRecorder.toml` whose test command prints `output`.
pub fn write_config(dir: &Path, output: &str) -> PathBuf {
    let command = fake_test_command(dir, output);
    let config_path = dir.join("PerfRecorder.toml");
    let content = format!(
        r#"language = "en"
output = "perf_results.csv"

[test_command]
command = "{command}"
"#
    );
    fs::write(&config_path, content).expect("Failed to write PerfRecorder.toml");
    config_path
}

/// Reads the report as a list of lines.
pub fn read_report(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read report")
        .lines()
        .map(str::to_string)
        .collect()
}
