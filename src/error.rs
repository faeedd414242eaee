// src/error.rs
//! Error types for resolving, reading and writing concatenated text.
//!
//! Every failure an invocation can hit is a variant of [`ConcatError`].
//! Resolution failures carry the offending pattern, filesystem failures
//! carry the path they were about.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single path or pattern entry failed to resolve.
#[derive(Error, Debug)]
pub enum PatternFailure {
    /// The glob engine rejected the pattern syntax.
    #[error("malformed pattern: {0}")]
    Malformed(#[from] glob::PatternError),

    /// A directory could not be walked while expanding the pattern.
    #[error("could not traverse matches: {0}")]
    Traversal(#[from] glob::GlobError),

    /// The pattern is well-formed but nothing on disk matched it.
    #[error("no files matched")]
    NoMatches,
}

/// Main error type for a concatenation.
#[derive(Error, Debug)]
pub enum ConcatError {
    #[error("No input paths or patterns were given")]
    EmptyInput,

    #[error("Pattern '{pattern}' could not be resolved: {cause}")]
    Pattern {
        pattern: String,
        #[source]
        cause: PatternFailure,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Background task ended before settling: {message}")]
    TaskFailed { message: String },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] io::Error),
}

impl ConcatError {
    pub(crate) fn pattern(pattern: impl Into<String>, cause: impl Into<PatternFailure>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            cause: cause.into(),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// The pattern that failed to resolve, if this is a resolution error.
    pub fn failed_pattern(&self) -> Option<&str> {
        match self {
            Self::Pattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// The file the failing read or write was about.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether a pattern was valid but matched nothing.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            Self::Pattern {
                cause: PatternFailure::NoMatches,
                ..
            }
        )
    }
}
