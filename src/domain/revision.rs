//! # Revision Lookup Module / 版本查询模块
//!
//! Best-effort lookup of the commit the measurements were taken at.
//! The lookup itself returns a typed error; callers that only need a value
//! for the report use [`resolve_revision`], which substitutes
//! [`UNKNOWN_REVISION`].
//!
//! 尽力查询测量时所在的提交。查询本身返回类型化的错误；
//! 只需要报告值的调用方使用 [`resolve_revision`]，失败时替换为 "unknown"。

use std::path::Path;
use std::process::Stdio;
use thiserror::Error;

pub use crate::domain::models::UNKNOWN_REVISION;

/// Why the current revision could not be determined.
#[derive(Debug, Error)]
pub enum RevisionError {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("`{program}` printed no revision")]
    Empty { program: String },
    #[error("`{program}` printed a non UTF-8 revision")]
    Encoding { program: String },
}

/// The command that prints the current revision on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionSource {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for RevisionSource {
    /// `git rev-parse HEAD`
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            args: vec!["rev-parse".to_string(), "HEAD".to_string()],
        }
    }
}

impl RevisionSource {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Runs the lookup command in `dir` and returns its trimmed stdout.
    pub async fn lookup(&self, dir: &Path) -> Result<String, RevisionError> {
        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RevisionError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RevisionError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| RevisionError::Encoding {
            program: self.program.clone(),
        })?;
        let revision = stdout.trim();
        if revision.is_empty() {
            return Err(RevisionError::Empty {
                program: self.program.clone(),
            });
        }
        Ok(revision.to_string())
    }
}

/// Looks up the revision, falling back to [`UNKNOWN_REVISION`].
///
/// Returns the error alongside the sentinel so the caller can mention it.
pub async fn resolve_revision(
    source: &RevisionSource,
    dir: &Path,
) -> (String, Option<RevisionError>) {
    match source.lookup(dir).await {
        Ok(revision) => (revision, None),
        Err(e) => (UNKNOWN_REVISION.to_string(), Some(e)),
    }
}
