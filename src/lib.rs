//! # Perf Recorder Library / Perf Recorder 库
//!
//! This library provides the core functionality for the `perf-recorder` tool,
//! a small harness that runs an `xcodebuild` measurement suite, extracts the
//! reported averages and appends them to a CSV performance log.
//!
//! 此库为 `perf-recorder` 工具提供核心功能：
//! 运行 `xcodebuild` 性能测试套件，提取报告的平均耗时，并追加到 CSV 性能日志中。
//!
//! ## Modules / 模块
//!
//! - `domain` - Data models, configuration, result extraction and revision lookup
//! - `infra` - Process execution and output capture
//! - `reporting` - CSV report writing and console output
//! - `cli` / `commands` - Command-line interface and its subcommands
//!
//! - `domain` - 数据模型、配置、结果提取和版本查询
//! - `infra` - 进程执行和输出捕获
//! - `reporting` - CSV 报告写入和控制台输出
//! - `cli` / `commands` - 命令行接口及其子命令

pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use domain::config;
pub use domain::extract;
pub use domain::models;
pub use domain::revision;

/// Resolves the UI language for a requested locale.
///
/// Tries the full locale first (e.g. "zh-CN"), then the language part only
/// (e.g. "en" from "en-US"), and finally falls back to "en".
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }
    requested
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

rust_i18n::i18n!("locales", fallback = "en");
