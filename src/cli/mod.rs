//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for medrec using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// medrec - department patient record generator
#[derive(Parser, Debug)]
#[command(name = "medrec")]
#[command(version, about, long_about = None)]
#[command(author = "Medrec Contributors")]
pub struct Cli {
    /// Path to an optional configuration file
    #[arg(short, long, env = "MEDREC_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDREC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to `demo`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, falling back to the demonstration sequence
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Demo(commands::demo::DemoArgs {}))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the fixed demonstration sequence
    Demo(commands::demo::DemoArgs),

    /// Generate a single patient record
    Generate(commands::generate::GenerateArgs),

    /// List registered departments
    Departments(commands::departments::DepartmentsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command needs a record context built from configuration
    pub fn needs_context(&self) -> bool {
        matches!(
            self,
            Commands::Demo(_) | Commands::Generate(_) | Commands::Departments(_)
        )
    }
}
