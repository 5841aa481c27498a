//! # CSV Report Module / CSV 报告模块
//!
//! Appends report rows to the CSV performance log. The header is written
//! exactly when the file is empty right after it has been opened, so deciding
//! on the header and appending happen on one file handle.
//!
//! 将报告行追加到 CSV 性能日志中。仅当文件打开后为空时才写入表头，
//! 因此表头判断和追加写入使用同一个文件句柄。

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

use crate::domain::models::ReportRow;
use crate::infra::t;

/// What [`append_row`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The file was empty or missing; header and row were written.
    Created,
    /// The file already had content; only the row was written.
    Appended,
}

/// Appends `row` to the CSV file at `path`, laid out by `headers`.
///
/// Each field is looked up in the row by header name: names the row lacks
/// produce an empty field, and row columns missing from `headers` are not
/// written. The header line is only emitted into an empty file.
///
/// 按 `headers` 的顺序将 `row` 追加到 `path` 处的 CSV 文件。
/// 行中缺少的列写为空字段，不在 `headers` 中的列会被丢弃。仅在文件为空时写入表头。
pub fn append_row(path: &Path, row: &ReportRow, headers: &[String]) -> Result<AppendOutcome> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| t!("report.open_failed", path = path.display()).to_string())?;

    let is_new = file
        .metadata()
        .with_context(|| t!("report.open_failed", path = path.display()).to_string())?
        .len()
        == 0;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    let write_failed = || t!("report.write_failed", path = path.display()).to_string();

    if is_new {
        writer.write_record(headers).with_context(write_failed)?;
    }
    let fields = headers
        .iter()
        .map(|name| row.field(name).unwrap_or_default());
    writer.write_record(fields).with_context(write_failed)?;
    writer.flush().with_context(write_failed)?;

    Ok(if is_new {
        AppendOutcome::Created
    } else {
        AppendOutcome::Appended
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MeasurementSet;
    use std::fs;

    #[test]
    fn empty_existing_file_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perf.csv");
        fs::write(&path, "").unwrap();

        let row = ReportRow::new("d", "s", MeasurementSet::new());
        let outcome = append_row(&path, &row, &row.headers()).unwrap();

        assert_eq!(outcome, AppendOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,git_sha\nd,s\n");
    }
}
