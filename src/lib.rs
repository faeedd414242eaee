// src/lib.rs
//! concatenate library — joins text files selected by paths or glob patterns.
//!
//! # Public API
//!
//! - **Entry points** — `concatenate`, `concatenate_with_callback`,
//!   `concatenate_to` (async) and `concatenate_sync`, `concatenate_sync_to`
//! - **Resolution** — `Input`, `resolve`, `resolve_concurrent`, `expand_pattern`
//! - **Error handling** — `ConcatError`, `PatternFailure`
//! - **Configuration and output** — `CommandLineInput`, `ConcatConfig`, `deliver`

mod config;
mod constants;
mod error;
mod executor;
mod input;
mod output;
mod resolve;

// --- Entry Points ---
pub use crate::executor::{
    concatenate, concatenate_sync, concatenate_sync_to, concatenate_to,
    concatenate_with_callback, join_texts, BackgroundTask,
};

// --- Resolution ---
pub use crate::input::Input;
pub use crate::resolve::{expand_pattern, resolve, resolve_concurrent, ResolvedFileList};

// --- Error Handling ---
pub use crate::error::{ConcatError, PatternFailure};

// --- Configuration ---
pub use crate::config::{CommandLineInput, ConcatConfig};
pub use crate::constants::SEPARATOR;

// --- Output ---
pub use crate::output::{
    deliver, CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan,
    OutputReport,
};
