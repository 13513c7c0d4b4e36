//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "medrec.toml")]
    pub output: String,

    /// Include an example extra department
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing medrec configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: medrec --config {} validate-config", self.output);
                println!("  3. Run the demo: medrec --config {} demo", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# medrec Configuration File

[application]
log_level = "warn"

[records]
id_start = 1000

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with an example department
    fn generate_config_with_examples() -> String {
        r#"# medrec Configuration File
#
# Every value may reference an environment variable with ${VAR_NAME}.
# MEDREC_<SECTION>_<KEY> variables override values from this file,
# e.g. MEDREC_RECORDS_ID_START=5000.

[application]
# trace, debug, info, warn, error
log_level = "info"

[records]
# First id handed out by the shared record counter
id_start = 1000

# Extra departments registered at startup. Keys are case-insensitive and
# replace a built-in department with the same key.
[[departments]]
key = "pediatrics"
display_name = "Pediatrics"
default_tests = ["Growth Assessment", "Vaccination Review"]
detail_lines = [
    "Growth Percentile: 60th",
    "Vaccinations: Up to date",
    "Developmental Milestones: On track",
]

[logging]
# JSON log files in a rotating directory (daily, hourly, never)
local_enabled = true
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
