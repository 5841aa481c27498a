//! # Run Command Module / 运行命令模块
//!
//! Implements the `run` command: run the measurement suite, extract the
//! averages, stamp them with the time and revision, append the row to the
//! CSV report and print it.
//!
//! 实现 `run` 命令：运行性能测试套件，提取平均耗时，
//! 附上时间和版本信息，追加到 CSV 报告并打印。

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::{
    domain::{
        config::{self, PerfConfig},
        extract::parse_results,
        models::ReportRow,
        revision::{RevisionSource, resolve_revision},
    },
    infra::{command, t},
    reporting::{AppendOutcome, append_row, print_measurements, print_recorded_row},
};

/// Timestamp layout of the `date` column, e.g. `2026-10-19T14:05:00.123456`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Executes the run command.
///
/// # Arguments
/// * `config_path` - Explicit configuration file, or `None` to use `PerfRecorder.toml` if present
/// * `lang_override` - Whether `--lang` was given; if so the configured language is ignored
///
/// # Returns
/// The row that was appended to the report
pub async fn execute(config_path: Option<PathBuf>, lang_override: bool) -> Result<ReportRow> {
    let (config, loaded_from) = config::resolve_config(config_path.as_deref())?;

    match &loaded_from {
        Some(path) => {
            if !lang_override {
                rust_i18n::set_locale(&crate::resolve_locale(&config.language));
            }
            eprintln!("{}", t!("config.loading", path = path.display()));
        }
        None => eprintln!("{}", t!("config.using_defaults").dimmed()),
    }

    let working_dir = std::env::current_dir().context("Failed to determine the working directory")?;

    let row = record_run(&config, &working_dir, &RevisionSource::default()).await?;
    print_recorded_row(&row);
    Ok(row)
}

/// Runs the suite in `working_dir` and appends one row to the configured report.
///
/// A test command that cannot be launched aborts the run before anything is
/// written. Its exit status does not matter otherwise. A failed revision
/// lookup is recorded as `"unknown"`.
///
/// 在 `working_dir` 中运行测试套件，并向配置的报告追加一行。
/// 测试命令无法启动时会在写入任何内容之前中止；除此之外不关心其退出状态。
/// 版本查询失败时记录为 `"unknown"`。
pub async fn record_run(
    config: &PerfConfig,
    working_dir: &Path,
    revision_source: &RevisionSource,
) -> Result<ReportRow> {
    let test_command = command::build_test_command(&config.test_command)?;
    eprintln!(
        "{} {}",
        t!("run.command_prefix").blue(),
        test_command.display
    );

    let start_time = Instant::now();
    let captured = command::spawn_and_capture(test_command.to_command(working_dir)).await?;
    let duration = start_time.elapsed();

    eprintln!(
        "{}",
        t!("run.finished", duration = format!("{:.2}", duration.as_secs_f64())).green()
    );
    if !captured.status.success() {
        eprintln!(
            "{}",
            t!("run.nonzero_exit", status = captured.status).yellow()
        );
    }

    let measurements = parse_results(&captured.output);
    print_measurements(&measurements);

    let date = Local::now().format(DATE_FORMAT).to_string();
    let (git_sha, revision_error) = resolve_revision(revision_source, working_dir).await;
    if let Some(e) = revision_error {
        eprintln!("{}", t!("run.revision_unknown", error = e).yellow());
    }

    let row = ReportRow::new(date, git_sha, measurements);
    let headers = row.headers();

    let report_path = working_dir.join(&config.output);
    match append_row(&report_path, &row, &headers)? {
        AppendOutcome::Created => eprintln!(
            "{}",
            t!(
                "run.header_written",
                path = report_path.display(),
                header = headers.join(",")
            )
            .dimmed()
        ),
        AppendOutcome::Appended => eprintln!(
            "{}",
            t!("run.row_written", path = report_path.display()).dimmed()
        ),
    }

    Ok(row)
}
