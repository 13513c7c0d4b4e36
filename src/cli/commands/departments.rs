//! Departments command implementation
//!
//! Lists every registered department with its default tests.

use crate::core::RecordService;
use clap::Args;
use std::io::Write;

/// Arguments for the departments command
#[derive(Args, Debug, Clone)]
pub struct DepartmentsArgs {
    /// Also print each department's detail report lines
    #[arg(long)]
    pub with_details: bool,
}

impl DepartmentsArgs {
    /// Execute the departments command
    pub fn execute(&self, service: &RecordService) -> anyhow::Result<i32> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(service, &mut out)?;
        out.flush()?;
        Ok(0)
    }

    /// Write the department listing to `out`
    pub fn write_to<W: Write>(&self, service: &RecordService, out: &mut W) -> anyhow::Result<()> {
        let departments = service.departments();
        writeln!(out, "Registered departments ({}):", departments.len())?;
        for department in departments {
            writeln!(
                out,
                "  {} ({}): {}",
                department.key(),
                department.display_name(),
                department.default_tests().join(", ")
            )?;
            if self.with_details {
                for line in department.detail_lines() {
                    writeln!(out, "      {line}")?;
                }
            }
        }
        Ok(())
    }
}
