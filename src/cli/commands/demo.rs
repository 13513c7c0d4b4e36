//! Demo command implementation
//!
//! Runs the fixed demonstration sequence and prints it to stdout.

use crate::core::{run_demo, RecordService};
use clap::Args;
use std::io::Write;

/// Arguments for the demo command
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self, service: &RecordService) -> anyhow::Result<i32> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(service, &mut out)?;
        out.flush()?;
        Ok(0)
    }

    /// Write the demonstration output to `out`
    pub fn write_to<W: Write>(&self, service: &RecordService, out: &mut W) -> anyhow::Result<()> {
        run_demo(service, out)?;
        Ok(())
    }
}
