// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::{env, path::PathBuf};

use crate::{commands, domain::config::DEFAULT_CONFIG_FILE, infra::t};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config").to_string())
        .value_name("CONFIG")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli() -> Command {
    Command::new("perf-recorder")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(config_arg())
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about").to_string())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about").to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_language = pre_parse_language();
    let language = match &explicit_language {
        Some(lang) => crate::resolve_locale(lang),
        None => crate::resolve_locale(
            &sys_locale::get_locale().unwrap_or_else(|| "en".to_string()),
        ),
    };
    rust_i18n::set_locale(&language);

    let matches = build_cli().get_matches();
    let lang_override = explicit_language.is_some();

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if !lang_override && !non_interactive {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", lang = &language).dimmed()
                );
            }
            commands::init::run_init_wizard(
                &PathBuf::from(DEFAULT_CONFIG_FILE),
                &language,
                non_interactive,
            )?;
        }
        Some(("run", run_matches)) => {
            commands::run::execute(config_path(run_matches, &matches), lang_override).await?;
        }
        _ => {
            commands::run::execute(config_path(&matches, &matches), lang_override).await?;
        }
    }
    Ok(())
}

/// `--config` given to the subcommand, or else to the top-level command.
fn config_path(sub_matches: &ArgMatches, matches: &ArgMatches) -> Option<PathBuf> {
    sub_matches
        .get_one::<PathBuf>("config")
        .or_else(|| matches.get_one::<PathBuf>("config"))
        .cloned()
}
