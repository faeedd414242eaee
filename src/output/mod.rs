// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning where joined text goes is pure data; the writer module is the
//! only place that touches the output file or stdout.

mod types;
mod writer;

pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;
pub(crate) use writer::{write_file, write_file_async};
