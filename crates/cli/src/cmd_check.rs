// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `propcheck check` command implementation.

use std::io::Write;
use std::path::PathBuf;

use termcolor::StandardStream;

use propcheck::cli::{CheckArgs, Cli, OutputFormat};
use propcheck::config::{self, Config};
use propcheck::discovery;
use propcheck::engine::EngineOptions;
use propcheck::error::ExitCode;
use propcheck::loader::{self, LoaderConfig};
use propcheck::output::{TextFormatter, format_json};
use propcheck::runner::{Runner, RunnerConfig};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Find and load config
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let config = match &config_path {
        Some(path) => match config::load_with_warnings(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("propcheck: {err:#}");
                return Ok(ExitCode::ConfigError);
            }
        },
        None => Config::default(),
    };
    match &config_path {
        Some(path) => tracing::debug!("config: {}", path.display()),
        None => tracing::debug!("config: (defaults)"),
    }

    let paths: Vec<PathBuf> = if args.paths.is_empty() { vec![PathBuf::from(".")] } else { args.paths.clone() };
    let loader_config =
        LoaderConfig { include: config.include.clone(), exclude: config.exclude_patterns() };
    let entries = match loader::discover(&paths, &loader_config).and_then(|files| {
        tracing::debug!("found {} manifest files", files.len());
        loader::load(&files)
    }) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("propcheck: {err}");
            return Ok(ExitCode::ConfigError);
        }
    };

    let mode = args.mode(config.mode);
    let options = EngineOptions {
        disabled_exemption: args.disabled_exemption.unwrap_or(config.disabled_exemption),
    };
    let runner = Runner::new(RunnerConfig { mode, options });
    let results = runner.run(&entries);
    let summary = runner.summary();

    match args.output {
        OutputFormat::Text => {
            let limit = args.print_limit(config.limit());
            let mut stdout = StandardStream::stdout(args.color_mode().resolve());
            TextFormatter::new(limit).write_results(&mut stdout, &results, &summary)?;
            stdout.flush()?;
        }
        OutputFormat::Json => {
            println!("{}", format_json(mode, &results, &summary)?);
        }
    }

    Ok(if summary.passed() { ExitCode::Success } else { ExitCode::CheckFailed })
}
