//! # Infrastructure Module / 基础设施模块
//!
//! Process execution and output capture, plus the i18n `t!` macro
//! re-exported for the rest of the crate.
//!
//! 进程执行和输出捕获，并为整个 crate 重新导出 i18n 的 `t!` 宏。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
