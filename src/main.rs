// medrec - Department Patient Record Generator
// Copyright (c) 2025 Medrec Contributors
// Licensed under the MIT License

use clap::Parser;
use medrec::cli::{Cli, Commands};
use medrec::config::{load_config_or_default, LoggingConfig};
use medrec::core::{RecordContext, RecordService};
use medrec::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.resolved_command();

    let exit_code = if command.needs_context() {
        run_with_context(&cli, &command)
    } else {
        run_standalone(&cli, &command)
    };

    process::exit(exit_code);
}

/// Run commands that only need console logging (init, validate-config)
fn run_standalone(cli: &Cli, command: &Commands) -> i32 {
    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    let _guard = match init_logging(log_level, &LoggingConfig::default()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return 5;
        }
    };

    finish(execute_command(command, cli, None))
}

/// Load configuration, build the record context, then run the command
fn run_with_context(cli: &Cli, command: &Commands) -> i32 {
    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2; // Configuration error exit code
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return 5;
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "medrec - Department Patient Record Generator"
    );

    let context = match RecordContext::from_config(&config) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build record context");
            eprintln!("Error: {e}");
            return 2;
        }
    };
    let service = RecordService::new(context);

    finish(execute_command(command, cli, Some(&service)))
}

fn finish(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    }
}

/// Execute the CLI command
fn execute_command(
    command: &Commands,
    cli: &Cli,
    service: Option<&RecordService>,
) -> anyhow::Result<i32> {
    match (command, service) {
        (Commands::Demo(args), Some(service)) => args.execute(service),
        (Commands::Generate(args), Some(service)) => args.execute(service),
        (Commands::Departments(args), Some(service)) => args.execute(service),
        (Commands::ValidateConfig(args), _) => args.execute(cli.config.as_deref()),
        (Commands::Init(args), _) => args.execute(),
        (_, None) => anyhow::bail!("command requires a record context"),
    }
}
