//! # Configuration Module / 配置模块
//!
//! Optional `PerfRecorder.toml` settings. Every field has a built-in default,
//! so running without a configuration file records the `TendrilTree`
//! measurement suite into `perf_results.csv`.
//!
//! 可选的 `PerfRecorder.toml` 配置。所有字段都有内置默认值，
//! 因此在没有配置文件时会将 `TendrilTree` 性能测试结果记录到 `perf_results.csv`。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "PerfRecorder.toml";
/// Default CSV report path.
pub const DEFAULT_OUTPUT: &str = "perf_results.csv";

pub const DEFAULT_SCHEME: &str = "TendrilTree";
pub const DEFAULT_DESTINATION: &str = "platform=macOS";
pub const DEFAULT_ONLY_TESTING: &str = "TendrilTreeTests/Measurements";

/// The `xcodebuild test` invocation whose output is scanned for measurements.
/// 输出将被扫描以提取测量结果的 `xcodebuild test` 调用。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TestCommandConfig {
    /// Value of `-scheme` / `-scheme` 的值
    pub scheme: String,
    /// Value of `-destination` / `-destination` 的值
    pub destination: String,
    /// Test group passed as `-only-testing:<value>` / 以 `-only-testing:<value>` 传入的测试组
    pub only_testing: String,
    /// A full command line replacing the `xcodebuild` invocation. It is
    /// shell-expanded and split like a POSIX shell would.
    /// 替换 `xcodebuild` 调用的完整命令行，会进行 shell 展开和拆分。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for TestCommandConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            only_testing: DEFAULT_ONLY_TESTING.to_string(),
            command: None,
        }
    }
}

/// Top-level contents of `PerfRecorder.toml`.
/// `PerfRecorder.toml` 的顶层结构。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerfConfig {
    /// Language for console output (e.g. "en", "zh-CN").
    /// 控制台输出语言（例如 "en", "zh-CN"）。
    pub language: String,
    /// Path of the CSV report, relative to the working directory.
    /// CSV 报告路径，相对于工作目录。
    pub output: PathBuf,
    pub test_command: TestCommandConfig,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            test_command: TestCommandConfig::default(),
        }
    }
}

/// Loads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<PerfConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    let config: PerfConfig = toml::from_str(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())?;
    Ok(config)
}

/// Resolves the configuration for a run.
///
/// With an explicit `path` the file must exist. Without one, the default
/// file is used if present and built-in defaults otherwise. Returns the
/// path that was actually loaded, if any.
pub fn resolve_config(path: Option<&Path>) -> Result<(PerfConfig, Option<PathBuf>)> {
    match path {
        Some(path) => Ok((load_config(path)?, Some(path.to_path_buf()))),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Ok((load_config(default_path)?, Some(default_path.to_path_buf())))
            } else {
                Ok((PerfConfig::default(), None))
            }
        }
    }
}
