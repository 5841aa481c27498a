//! # Commands Module / 命令模块
//!
//! The subcommands of the `perf-recorder` CLI.
//!
//! `perf-recorder` CLI 的子命令。

pub mod init;
pub mod run;
