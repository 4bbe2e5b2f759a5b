// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use propcheck::cli::{Cli, Command, OutputFormat, RulesArgs};
use propcheck::error::ExitCode;
use propcheck::output::{TextFormatter, format_rules_json};

mod cmd_check;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Component panics are caught and reported as violations.
    std::panic::set_hook(Box::new(|info| tracing::debug!("panic: {info}")));

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("propcheck: {err:#}");
            ExitCode::InternalError.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Some(Command::Check(args)) => cmd_check::run(cli, args),
        Some(Command::Rules(args)) => run_rules(args),
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::Success)
        }
    }
}

fn run_rules(args: &RulesArgs) -> anyhow::Result<ExitCode> {
    match args.output {
        OutputFormat::Text => {
            let mut stdout = termcolor::StandardStream::stdout(termcolor::ColorChoice::Never);
            TextFormatter::new(None).write_rules(&mut stdout)?;
        }
        OutputFormat::Json => println!("{}", format_rules_json()?),
    }
    Ok(ExitCode::Success)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PROPCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
