//! # Command Execution Module / 命令执行模块
//!
//! Builds the measurement-suite invocation and runs it, capturing stdout and
//! stderr into a single text blob.
//!
//! 构建性能测试套件的调用命令并运行，将 stdout 和 stderr 捕获为单个文本。

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::domain::config::TestCommandConfig;
use crate::infra::t;

/// Program used when no custom command is configured.
pub const XCODEBUILD: &str = "xcodebuild";

/// A command ready to be spawned, plus its display form for logs.
#[derive(Debug)]
pub struct TestCommand {
    pub program: String,
    pub args: Vec<String>,
    /// The command line as shown to the user / 展示给用户的命令行
    pub display: String,
}

impl TestCommand {
    /// Converts into a `tokio` command running in `working_dir`.
    pub fn to_command(&self, working_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

/// Builds the test invocation from the configuration.
///
/// Without a custom `command` this is
/// `xcodebuild test -scheme <scheme> -destination <destination> -only-testing:<filter>`.
/// A custom command is shell-expanded and split into program and arguments.
///
/// 根据配置构建测试调用。没有自定义 `command` 时使用固定的 `xcodebuild test` 调用；
/// 自定义命令会进行 shell 展开并拆分为程序和参数。
pub fn build_test_command(config: &TestCommandConfig) -> Result<TestCommand> {
    let parts = match &config.command {
        Some(custom_command) => {
            let expanded_command = shellexpand::full(custom_command)
                .with_context(|| t!("command.expand_failed", command = custom_command).to_string())?
                .to_string();
            shlex::split(&expanded_command)
                .ok_or_else(|| anyhow!(t!("command.parse_failed", command = &expanded_command).to_string()))?
        }
        None => vec![
            XCODEBUILD.to_string(),
            "test".to_string(),
            "-scheme".to_string(),
            config.scheme.clone(),
            "-destination".to_string(),
            config.destination.clone(),
            format!("-only-testing:{}", config.only_testing),
        ],
    };

    let mut parts = parts.into_iter();
    let program = parts.next().ok_or_else(|| anyhow!(t!("command.empty").to_string()))?;
    let args: Vec<String> = parts.collect();

    let display = std::iter::once(program.as_str())
        .chain(args.iter().map(String::as_str))
        .map(|part| shlex::try_quote(part).map_or_else(|_| part.to_string(), |q| q.into_owned()))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(TestCommand {
        program,
        args,
        display,
    })
}

/// What a finished child process left behind.
#[derive(Debug)]
pub struct CapturedOutput {
    /// Exit status of the child. Recorded for display only.
    pub status: ExitStatus,
    /// Combined stdout and stderr, interleaved line by line.
    pub output: String,
}

/// Spawns a command and captures its stdout and stderr.
/// Both streams are read concurrently and combined into a single string,
/// one `\n`-terminated line at a time.
///
/// Failing to launch the process is an error; the child's exit status is
/// returned as-is and never turned into one.
///
/// 派生一个命令，并发读取其 stdout 和 stderr，按行合并为一个字符串。
/// 进程无法启动时返回错误；子进程的退出状态原样返回，不会被视为错误。
pub async fn spawn_and_capture(mut cmd: Command) -> Result<CapturedOutput> {
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();

    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| t!("command.launch_failed", program = &program).to_string())?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!(t!("command.capture_stdout_failed").to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!(t!("command.capture_stderr_failed").to_string()))?;

    // Both readers append to the same buffer so the lines stay interleaved.
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_handle = tokio::spawn(collect_lines(stdout, Arc::clone(&output)));
    let stderr_handle = tokio::spawn(collect_lines(stderr, Arc::clone(&output)));

    let status = child
        .wait()
        .await
        .with_context(|| t!("command.launch_failed", program = &program).to_string())?;

    // Drain both pipes before reading the buffer.
    stdout_handle.await.context("stdout reader task failed")?;
    stderr_handle.await.context("stderr reader task failed")?;

    let output = output.lock().await.clone();
    Ok(CapturedOutput { status, output })
}

async fn collect_lines<R>(stream: R, output: Arc<tokio::sync::Mutex<String>>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                let mut output = output.lock().await;
                output.push_str(line);
                output.push('\n');
            }
        }
    }
}
