//! Generate command implementation
//!
//! Generates one record and prints it as text or JSON.

use crate::core::RecordService;
use crate::domain::RecordError;
use clap::{Args, ValueEnum};
use std::io::Write;

/// Output format for generated records
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Department key (case-insensitive)
    pub department: String,

    /// Patient name
    pub name: String,

    /// Include the department detail report
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, service: &RecordService) -> anyhow::Result<i32> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let code = self.write_to(service, &mut out)?;
        out.flush()?;
        Ok(code)
    }

    /// Generate the record and write it to `out`, returning the exit code
    ///
    /// An unknown department is reported on `out` and still exits 0.
    pub fn write_to<W: Write>(&self, service: &RecordService, out: &mut W) -> anyhow::Result<i32> {
        tracing::info!(
            department = %self.department,
            detailed = self.detailed,
            "Generating record"
        );

        match service.generate(&self.department, &self.name, self.detailed) {
            Ok(record) => {
                match self.format {
                    OutputFormat::Text => writeln!(out, "{record}")?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&record.view())?)?
                    }
                }
                Ok(0)
            }
            Err(e @ RecordError::UnknownDepartment(_)) => {
                writeln!(out, "{e}")?;
                Ok(0)
            }
            Err(e) => {
                writeln!(out, "❌ {e}")?;
                Ok(1)
            }
        }
    }
}
