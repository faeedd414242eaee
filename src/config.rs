// src/config.rs
use crate::constants::{LOG_FILE_ENV, LOG_FILE_NAME};
use crate::error::ConcatError;
use crate::input::Input;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Files or glob patterns to concatenate, in output order (e.g. "notes/*.md")
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Write the concatenated text to this file (replacing its content)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Also print to stdout when writing an output file
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Read files one after another instead of concurrently
    #[arg(short = 's', long, default_value_t = false)]
    pub sequential: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Where to write the debug log (defaults to the temp dir)
    #[arg(long, env = LOG_FILE_ENV)]
    pub log_file: Option<String>,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatConfig {
    pub input: Input,
    pub output_file: Option<PathBuf>,
    pub pipe: bool,
    pub sequential: bool,
    pub verbose: bool,
    pub log_file: PathBuf,
}

impl ConcatConfig {
    /// Validates command-line input into a run configuration.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, ConcatError> {
        let entries: Vec<String> = cli
            .inputs
            .into_iter()
            .filter(|entry| !entry.trim().is_empty())
            .collect();

        if entries.is_empty() {
            return Err(ConcatError::MissingConfiguration(
                "at least one non-blank path or pattern is required".to_string(),
            ));
        }

        let output_file = match cli.output_file {
            Some(path) if path.trim().is_empty() => {
                return Err(ConcatError::MissingConfiguration(
                    "--output-file must not be blank".to_string(),
                ))
            }
            other => other.map(PathBuf::from),
        };

        let log_file = cli
            .log_file
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));

        Ok(Self {
            input: Input::Sequence(entries),
            output_file,
            pipe: cli.pipe,
            sequential: cli.sequential,
            verbose: cli.verbose,
            log_file,
        })
    }

    /// Whether the joined text should be printed to stdout.
    pub fn prints_to_stdout(&self) -> bool {
        self.output_file.is_none() || self.pipe
    }
}
