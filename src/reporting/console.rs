//! # Console Reporting Module / 控制台报告模块
//!
//! Human-readable output of a recording run. Notices and the measurement
//! table go to stderr; the recorded row is the only line printed to stdout.
//!
//! 记录运行的可读输出。提示信息和测量表输出到 stderr；
//! 记录的行是唯一输出到 stdout 的内容。

use colored::*;

use crate::domain::models::{MeasurementSet, ReportRow};
use crate::infra::t;

/// Prints a table of the extracted measurements to stderr.
///
/// # Output Format / 输出格式
/// ```text
/// --- Measurements ---
///   - Test                                     | Average (s)
///   - Measurements.testInsert                  |     0.003000
///   - Measurements.testDelete                  |     0.010000
/// ```
pub fn print_measurements(measurements: &MeasurementSet) {
    if measurements.is_empty() {
        eprintln!("{}", t!("run.no_measurements").yellow());
        return;
    }

    eprintln!("\n{}", t!("summary.banner").bold());
    eprintln!(
        "  - {:<40} | {:>12}",
        t!("summary.name").dimmed(),
        t!("summary.average").dimmed()
    );
    for (name, average) in measurements.iter() {
        eprintln!("  - {:<40} | {:>12.6}", name.cyan(), average);
    }
}

/// Formats the line announcing the recorded row.
pub fn recorded_line(row: &ReportRow) -> String {
    t!("run.recorded", row = row).to_string()
}

/// Prints the recorded row to stdout.
pub fn print_recorded_row(row: &ReportRow) {
    println!("{}", recorded_line(row));
}
