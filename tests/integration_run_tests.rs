//! # Run Integration Tests / 运行集成测试
//!
//! Drives `record_run` end to end with a fake test command that prints a
//! canned `xcodebuild` log, and checks the row it returns and the CSV it writes.
//!
//! 使用打印预设 `xcodebuild` 日志的假测试命令端到端地驱动 `record_run`，
//! 并检查返回的行和写入的 CSV。

#![cfg(unix)]

mod common;

use common::{INSERT_LINE, XCODE_LOG, fake_test_command, read_report, setup_workspace};
use perf_recorder::commands::run::record_run;
use perf_recorder::config::{PerfConfig, TestCommandConfig};
use perf_recorder::revision::RevisionSource;
use std::path::Path;

fn config_printing(dir: &Path, output: &str) -> PerfConfig {
    PerfConfig {
        test_command: TestCommandConfig {
            command: Some(fake_test_command(dir, output)),
            ..TestCommandConfig::default()
        },
        ..PerfConfig::default()
    }
}

fn fixed_revision() -> RevisionSource {
    RevisionSource::new("echo", &["0123456789abcdef0123456789abcdef01234567"])
}

fn broken_revision() -> RevisionSource {
    RevisionSource::new("this_vcs_definitely_does_not_exist_12345", &[])
}

#[tokio::test]
async fn test_single_measurement_line_is_recorded() {
    let dir = setup_workspace();
    let config = config_printing(dir.path(), &format!("{INSERT_LINE}\n** TEST SUCCEEDED **\n"));

    let row = record_run(&config, dir.path(), &fixed_revision()).await.unwrap();

    assert_eq!(row.measurements.len(), 1);
    assert_eq!(row.measurements.get("TendrilTreeTests.testInsert"), Some(0.003));
    assert_eq!(row.git_sha, "0123456789abcdef0123456789abcdef01234567");

    let lines = read_report(&dir.path().join("perf_results.csv"));
    assert_eq!(lines[0], "date,git_sha,TendrilTreeTests.testInsert");
    assert_eq!(
        lines[1],
        format!(
            "{},0123456789abcdef0123456789abcdef01234567,0.003",
            row.date
        )
    );
}

#[tokio::test]
async fn test_output_without_measurements_records_date_and_sha_only() {
    let dir = setup_workspace();
    let config = config_printing(dir.path(), "** BUILD SUCCEEDED **\n");

    let row = record_run(&config, dir.path(), &fixed_revision()).await.unwrap();

    assert!(row.measurements.is_empty());
    assert_eq!(row.headers(), vec!["date", "git_sha"]);
    let lines = read_report(&dir.path().join("perf_results.csv"));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "date,git_sha");
}

#[tokio::test]
async fn test_failed_revision_lookup_records_unknown() {
    let dir = setup_workspace();
    let config = config_printing(dir.path(), XCODE_LOG);

    let row = record_run(&config, dir.path(), &broken_revision()).await.unwrap();

    assert_eq!(row.git_sha, "unknown");
    assert_eq!(row.field("git_sha").as_deref(), Some("unknown"));
    let lines = read_report(&dir.path().join("perf_results.csv"));
    assert!(lines[1].contains(",unknown,0.003,0.01"));
}

#[tokio::test]
async fn test_failing_test_command_is_still_recorded() {
    let dir = setup_workspace();
    let mut config = config_printing(dir.path(), XCODE_LOG);
    config.test_command.command = Some("sh -c 'cat xcodebuild_output.txt; exit 65'".to_string());

    let row = record_run(&config, dir.path(), &fixed_revision()).await.unwrap();

    assert_eq!(row.measurements.len(), 2);
    assert!(dir.path().join("perf_results.csv").exists());
}

#[tokio::test]
async fn test_launch_failure_aborts_without_writing() {
    let dir = setup_workspace();
    let mut config = PerfConfig::default();
    config.test_command.command = Some("this_command_does_not_exist_12345 test".to_string());

    assert!(record_run(&config, dir.path(), &fixed_revision()).await.is_err());
    assert!(!dir.path().join("perf_results.csv").exists());
}

#[tokio::test]
async fn test_consecutive_runs_share_one_header() {
    let dir = setup_workspace();
    let config = config_printing(dir.path(), XCODE_LOG);

    record_run(&config, dir.path(), &fixed_revision()).await.unwrap();
    record_run(&config, dir.path(), &fixed_revision()).await.unwrap();

    let lines = read_report(&dir.path().join("perf_results.csv"));
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "date,git_sha,Measurements.testInsert,Measurements.testDelete"
    );
}

#[tokio::test]
async fn test_configured_output_path_is_relative_to_working_dir() {
    let dir = setup_workspace();
    let mut config = config_printing(dir.path(), XCODE_LOG);
    config.output = "history.csv".into();

    record_run(&config, dir.path(), &fixed_revision()).await.unwrap();

    assert!(dir.path().join("history.csv").exists());
    assert!(!dir.path().join("perf_results.csv").exists());
}
