//! # Reporting Module / 报告模块
//!
//! Persists report rows to the CSV performance log and prints run results
//! to the console.
//!
//! 将报告行持久化到 CSV 性能日志，并在控制台打印运行结果。

pub mod console;
pub mod csv_report;

// Re-export common reporting functions
pub use console::{print_measurements, print_recorded_row};
pub use csv_report::{AppendOutcome, append_row};
