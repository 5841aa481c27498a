//! # Configuration Initialization Module / 配置初始化模块
//!
//! Creates a `PerfRecorder.toml` either straight from the built-in defaults
//! or through a short interactive wizard that asks for the `xcodebuild`
//! scheme, destination, test filter and report path.
//!
//! 直接根据内置默认值，或通过简短的交互式向导（询问 `xcodebuild` 的 scheme、
//! destination、测试过滤和报告路径）创建 `PerfRecorder.toml`。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{PerfConfig, TestCommandConfig};
use crate::infra::t;

/// Runs the wizard and writes the configuration to `config_path`.
///
/// In non-interactive mode the defaults are written without prompting, and an
/// existing file is overwritten.
pub fn run_init_wizard(config_path: &Path, language: &str, non_interactive: bool) -> Result<()> {
    let mut config = PerfConfig {
        language: language.to_string(),
        ..PerfConfig::default()
    };

    if non_interactive {
        return write_config(config_path, &config);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.welcome").cyan().bold());
    println!("{}", t!("init.description"));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    let defaults = TestCommandConfig::default();
    let prompt = |label: String, default: String| -> Result<String> {
        Input::<String>::with_theme(&theme)
            .with_prompt(label)
            .default(default)
            .interact_text()
            .context(t!("init.confirmation_failed").to_string())
    };

    config.test_command = TestCommandConfig {
        scheme: prompt(t!("init.prompt_scheme").to_string(), defaults.scheme)?,
        destination: prompt(t!("init.prompt_destination").to_string(), defaults.destination)?,
        only_testing: prompt(t!("init.prompt_only_testing").to_string(), defaults.only_testing)?,
        command: None,
    };
    let output = prompt(t!("init.prompt_output").to_string(), config.output.display().to_string())?;
    config.output = PathBuf::from(output);

    write_config(config_path, &config)
}

fn write_config(path: &Path, config: &PerfConfig) -> Result<()> {
    let toml_string =
        toml::to_string_pretty(config).context(t!("init.serialize_failed").to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.written", path = path.display()).bold()
    );
    Ok(())
}
