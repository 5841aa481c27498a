//! # Result Extraction Module / 结果提取模块
//!
//! Scans `xcodebuild` output for performance-test reports of the form
//!
//! ```text
//! Test Case '-[TendrilTreeTests.Measurements testInsert]' measured [Time, seconds] average: 0.003, ...
//! ```
//!
//! and collects the averages into a [`MeasurementSet`].
//!
//! 扫描 `xcodebuild` 输出中的性能测试报告行，并将平均耗时收集到 [`MeasurementSet`] 中。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::MeasurementSet;

/// Matches one measurement report. Captures the class, the method and the
/// average. A leading `Module.` qualifier on the class is dropped.
pub const MEASUREMENT_PATTERN: &str = r"Test Case '-\[(?:\w+\.)?(\w+)[ .](\w+)\]'? measured \[Time, seconds\] average: ([0-9.]+),";

static MEASUREMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MEASUREMENT_PATTERN).expect("measurement pattern is a valid regex"));

/// Extracts every measurement report in `output`, in order of appearance.
///
/// The key of each entry is `"<class>.<method>"`; a later report for the same
/// key overwrites the earlier one. Text without any report yields an empty set.
///
/// 按出现顺序提取 `output` 中的所有测量报告。
/// 键为 `"<class>.<method>"`；同一键的后续报告覆盖之前的值。没有报告时返回空集合。
pub fn parse_results(output: &str) -> MeasurementSet {
    let mut results = MeasurementSet::new();
    for caps in MEASUREMENT_RE.captures_iter(output) {
        // `[0-9.]+` still admits things like "1.2.3".
        let Ok(average) = caps[3].parse::<f64>() else {
            continue;
        };
        results.insert(format!("{}.{}", &caps[1], &caps[2]), average);
    }
    results
}
