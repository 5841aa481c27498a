//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through a single
//! recording run: the measurements extracted from the test output and the
//! row that is eventually appended to the CSV report.
//!
//! 此模块定义单次记录运行中流转的数据结构：
//! 从测试输出中提取的测量结果，以及最终追加到 CSV 报告中的行。

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Column name of the timestamp field.
pub const DATE_COLUMN: &str = "date";
/// Column name of the revision field.
pub const GIT_SHA_COLUMN: &str = "git_sha";
/// Revision recorded when the lookup fails.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Average durations (in seconds) keyed by qualified test name (`"Class.method"`).
///
/// Keys keep the order in which they were first seen. Inserting an existing
/// key replaces its value but keeps its position, so the last report of a
/// test wins.
///
/// 以限定测试名（`"Class.method"`）为键的平均耗时（秒）。
/// 键保持首次出现的顺序；重复插入会覆盖值但保留位置。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    entries: IndexMap<String, f64>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an average for `name`, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, average: f64) {
        self.entries.insert(name.into(), average);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Test names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, avg)| (name.as_str(), *avg))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = MeasurementSet::new();
        for (name, average) in iter {
            set.insert(name, average);
        }
        set
    }
}

/// One record of the CSV report: when, at which revision, and what was measured.
///
/// `date` and `git_sha` are always present; the remaining columns are the
/// measurement names of the run the row was built from.
///
/// CSV 报告中的一条记录：时间、版本以及测量结果。
/// `date` 和 `git_sha` 始终存在；其余列为本次运行的测量名称。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// ISO-8601 local timestamp of the run / 运行时的 ISO-8601 本地时间戳
    pub date: String,
    /// Full commit hash, or [`UNKNOWN_REVISION`] / 完整提交哈希，或 "unknown"
    pub git_sha: String,
    /// Measurements extracted from the test output / 从测试输出中提取的测量结果
    pub measurements: MeasurementSet,
}

impl ReportRow {
    pub fn new(
        date: impl Into<String>,
        git_sha: impl Into<String>,
        measurements: MeasurementSet,
    ) -> Self {
        Self {
            date: date.into(),
            git_sha: git_sha.into(),
            measurements,
        }
    }

    /// Header for this row: `date`, `git_sha`, then measurement names in first-seen order.
    pub fn headers(&self) -> Vec<String> {
        [DATE_COLUMN, GIT_SHA_COLUMN]
            .into_iter()
            .chain(self.measurements.names())
            .map(str::to_string)
            .collect()
    }

    /// Textual value of the column `name`, or `None` if the row has no such column.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            DATE_COLUMN => Some(self.date.clone()),
            GIT_SHA_COLUMN => Some(self.git_sha.clone()),
            _ => self.measurements.get(name).map(|avg| avg.to_string()),
        }
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.measurements.len()))?;
        map.serialize_entry(DATE_COLUMN, &self.date)?;
        map.serialize_entry(GIT_SHA_COLUMN, &self.git_sha)?;
        for (name, average) in self.measurements.iter() {
            map.serialize_entry(name, &average)?;
        }
        map.end()
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
