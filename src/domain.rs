//! # Domain Module / 领域模块
//!
//! Data models, configuration, measurement extraction and revision lookup.
//!
//! 数据模型、配置、测量结果提取和版本查询。

pub mod config;
pub mod extract;
pub mod models;
pub mod revision;

// Re-exports
pub use config::PerfConfig;
pub use extract::parse_results;
pub use models::{MeasurementSet, ReportRow};
pub use revision::{RevisionSource, resolve_revision};
