// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! Both the library's write modes and the command-line delivery plan go
//! through the file writers here.

use super::types::*;
use crate::error::ConcatError;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Delivers the output plan, performing all I/O operations.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, ConcatError> {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::info!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        let op_start = Instant::now();
        match execute_operation(&operation) {
            Ok(bytes_written) => {
                let duration_ms = op_start.elapsed().as_millis() as u64;
                report = report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                    duration_ms,
                });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Output plan execution complete: {} succeeded, {} failed in {}ms",
        report.stats.operations_completed,
        report.stats.operations_failed,
        start_time.elapsed().as_millis()
    );

    Ok(report)
}

/// Executes a single output operation.
fn execute_operation(operation: &DeliveryTarget) -> Result<usize, ConcatError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

/// Writes content to a file, creating parent directories and truncating.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<usize, ConcatError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConcatError::write(path, e))?;
    }
    std::fs::write(path, content).map_err(|e| ConcatError::write(path, e))?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Async counterpart of [`write_file`].
pub(crate) async fn write_file_async(path: &Path, content: &str) -> Result<usize, ConcatError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ConcatError::write(path, e))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| ConcatError::write(path, e))?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), ConcatError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
