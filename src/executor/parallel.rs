// src/executor/parallel.rs
//! Concurrent concatenation on the Tokio runtime.
//!
//! Entries are expanded concurrently, then every resolved file is read by
//! its own task. Results are joined by original index, so the output never
//! depends on which read finishes first. Only the first error is reported.

use super::background::{spawn_background, BackgroundTask};
use super::fan_in::fan_out;
use super::join_texts;
use crate::error::ConcatError;
use crate::input::Input;
use crate::output::write_file_async;
use crate::resolve::resolve_concurrent;
use std::path::PathBuf;

/// Concatenates the files selected by `input`, reading them concurrently.
pub async fn concatenate(input: impl Into<Input>) -> Result<String, ConcatError> {
    let input = input.into();
    let files = resolve_concurrent(&input).await?;
    log::debug!("Reading {} file(s) concurrently", files.len());

    let texts = fan_out(files.into_paths(), |path: PathBuf| async move {
        let read = tokio::fs::read_to_string(&path).await;
        read.map_err(|e| ConcatError::read(path, e))
    })
    .await?;

    log::info!(
        "Concatenated {} file(s) from {} entries",
        texts.len(),
        input.entries().len()
    );
    Ok(join_texts(&texts))
}

/// Runs [`concatenate`] in the background and hands the outcome to `callback`.
///
/// The callback runs exactly once. Inside a Tokio runtime it runs on a
/// runtime worker; without one, on a dedicated background thread.
pub fn concatenate_with_callback<F>(input: impl Into<Input>, callback: F) -> BackgroundTask
where
    F: FnOnce(Result<String, ConcatError>) + Send + 'static,
{
    let input = input.into();
    spawn_background(async move {
        callback(concatenate(input).await);
    })
}

/// Concatenates in the background and writes the result to `output`.
///
/// Returns without waiting, with or without an ambient Tokio runtime.
/// Failures at any step are logged and otherwise unobservable; the handle
/// only tells when the background work is over.
pub fn concatenate_to(input: impl Into<Input>, output: impl Into<PathBuf>) -> BackgroundTask {
    let input = input.into();
    let output = output.into();
    spawn_background(async move {
        let outcome = match concatenate(input).await {
            Ok(text) => write_file_async(&output, &text).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = outcome {
            log::warn!(
                "Background concatenation to {} failed: {}",
                output.display(),
                e
            );
        }
    })
}
