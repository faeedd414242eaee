// src/main.rs

use anyhow::Context;
use clap::Parser;
use concatenate::{
    concatenate, concatenate_sync, deliver, CommandLineInput, ConcatConfig, ConcatError,
    DeliveryTarget, OutputPlan, OutputReport,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::path::Path;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout carries only the joined text.
fn setup_logging(verbose: bool, log_file_path: &Path) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Some(parent) = log_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Produces the joined text with the executor the configuration asks for.
async fn run_concatenation(config: &ConcatConfig) -> Result<String, ConcatError> {
    if config.sequential {
        let input = config.input.clone();
        tokio::task::spawn_blocking(move || concatenate_sync(input))
            .await
            .map_err(|e| ConcatError::TaskFailed {
                message: format!("sequential concatenation panicked: {}", e),
            })?
    } else {
        concatenate(config.input.clone()).await
    }
}

/// Sends the joined text to the output file and/or stdout.
fn deliver_text(config: &ConcatConfig, text: String) -> Result<OutputReport, ConcatError> {
    let mut plan = OutputPlan::new();

    if let Some(output_path) = &config.output_file {
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: output_path.clone(),
            content: text.clone(),
        });
    }
    if config.prints_to_stdout() {
        plan = plan.with_operation(DeliveryTarget::PrintToStdout { content: text });
    }

    let report = deliver(plan)?;

    if !report.is_success() {
        return Err(ConcatError::DeliveryFailed {
            failures: report.failed.iter().map(|f| f.error.clone()).collect(),
        });
    }

    Ok(report)
}

fn report_completion(report: &OutputReport) {
    for line in report.file_summaries() {
        eprintln!("{}", line);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    let config = ConcatConfig::resolve(cli)?;

    setup_logging(config.verbose, &config.log_file)
        .with_context(|| format!("could not set up logging at {}", config.log_file.display()))?;

    let text = run_concatenation(&config).await?;
    let report = deliver_text(&config, text)?;
    report_completion(&report);

    Ok(())
}
