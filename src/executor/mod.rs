// src/executor/mod.rs
//! The two ways to run a concatenation: concurrent on Tokio, or sequential
//! on the calling thread. Both resolve the same way and join the same way.

mod background;
pub(crate) mod fan_in;
mod parallel;
mod sequential;

pub use background::BackgroundTask;
pub use parallel::{concatenate, concatenate_to, concatenate_with_callback};
pub use sequential::{concatenate_sync, concatenate_sync_to};

use crate::constants::SEPARATOR;

/// Joins file contents in order, with [`SEPARATOR`] between them.
pub fn join_texts<S: AsRef<str>>(texts: &[S]) -> String {
    let total: usize = texts.iter().map(|t| t.as_ref().len()).sum::<usize>()
        + SEPARATOR.len() * texts.len().saturating_sub(1);

    let mut joined = String::with_capacity(total);
    for (index, text) in texts.iter().enumerate() {
        if index > 0 {
            joined.push_str(SEPARATOR);
        }
        joined.push_str(text.as_ref());
    }
    joined
}
