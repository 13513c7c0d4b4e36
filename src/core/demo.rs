//! Demonstration driver
//!
//! Runs the fixed walkthrough of summary, detailed, extension, template and
//! unknown-department scenarios, writing everything to the given writer.

use super::builder::RecordBuilder;
use super::service::RecordService;
use crate::domain::{PatientRecord, RecordError, Result};
use std::io::Write;

/// Write a record followed by a blank line
pub fn write_record<W: Write>(out: &mut W, record: &PatientRecord) -> Result<()> {
    writeln!(out, "{record}")?;
    writeln!(out)?;
    Ok(())
}

/// Write the outcome of a generate call
///
/// Records are printed; recoverable errors such as an unknown department are
/// printed as a message and swallowed. Other errors propagate.
pub fn write_outcome<W: Write>(out: &mut W, outcome: Result<PatientRecord>) -> Result<()> {
    match outcome {
        Ok(record) => write_record(out, &record),
        Err(e) if e.is_recoverable() => {
            writeln!(out, "{e}")?;
            writeln!(out)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run the demonstration sequence
///
/// # Errors
///
/// Returns an error only if writing to `out` fails or a built-in department
/// is missing from the registry
pub fn run_demo<W: Write>(service: &RecordService, out: &mut W) -> Result<()> {
    tracing::info!("Running demonstration sequence");

    writeln!(out, "=== Testing Original Functionality (Summary Reports) ===")?;
    writeln!(out)?;
    write_outcome(out, service.generate_summary("cardiology", "Rahim"))?;
    write_outcome(out, service.generate_summary("neurology", "Karim"))?;

    writeln!(out, "=== Testing Orthopedics Department ===")?;
    writeln!(out)?;
    write_outcome(out, service.generate_summary("orthopedics", "Ahmed"))?;

    writeln!(out, "=== Testing Detailed Reports (Builder Pattern) ===")?;
    writeln!(out)?;
    write_outcome(out, service.generate("cardiology", "Fatima", true))?;
    write_outcome(out, service.generate("neurology", "Salma", true))?;

    writeln!(out, "=== Testing New Department - Dermatology (Easy Extension) ===")?;
    writeln!(out)?;
    write_outcome(out, service.generate_summary("dermatology", "Hassan"))?;
    write_outcome(out, service.generate("dermatology", "Nadia", true))?;

    writeln!(out, "=== Testing Prototype Pattern (Cloning Records) ===")?;
    writeln!(out)?;
    let template = RecordBuilder::new()
        .name("Template Patient")
        .department(service.context().registry().lookup("cardiology")?)
        .detailed()
        .build(service.context().ids())?;

    writeln!(out, "Original Template:")?;
    write_record(out, &template)?;

    for (index, name) in ["Ali", "Zara"].into_iter().enumerate() {
        writeln!(out, "Cloned Record {}:", index + 1)?;
        write_outcome(out, service.generate_from_template(&template, name))?;
    }

    writeln!(out, "=== Testing Unknown Department Handling ===")?;
    writeln!(out)?;
    write_outcome(out, service.generate_summary("unknown", "Test Patient"))?;

    writeln!(out, "=== Demonstrating Singleton Pattern ===")?;
    writeln!(out, "RecordIdGenerator is a Singleton - all records share the same counter.")?;
    writeln!(out, "Notice the sequential record IDs: 1000, 1001, 1002, etc.")?;

    Ok(())
}

/// Convenience wrapper returning the demo output as a string
///
/// # Errors
///
/// See [`run_demo`]
pub fn render_demo(service: &RecordService) -> Result<String> {
    let mut buffer = Vec::new();
    run_demo(service, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| RecordError::Serialization(e.to_string()))
}
