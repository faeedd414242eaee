// src/executor/sequential.rs
//! Blocking concatenation: resolve, read and write one step at a time.

use super::join_texts;
use crate::error::ConcatError;
use crate::input::Input;
use crate::output::write_file;
use crate::resolve::resolve;
use std::path::Path;

/// Concatenates the files selected by `input` on the calling thread.
///
/// Files are read in output order and the first failure aborts the rest.
pub fn concatenate_sync(input: impl Into<Input>) -> Result<String, ConcatError> {
    let input = input.into();
    let files = resolve(&input)?;

    let texts = files
        .paths()
        .iter()
        .map(|path| {
            log::debug!("Reading {}", path.display());
            std::fs::read_to_string(path).map_err(|e| ConcatError::read(path, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Concatenated {} file(s) from {} entries",
        texts.len(),
        input.entries().len()
    );
    Ok(join_texts(&texts))
}

/// Like [`concatenate_sync`], then writes the joined text to `output`.
///
/// A failed write is returned as [`ConcatError::Write`]; nothing is written
/// if resolution or any read failed.
pub fn concatenate_sync_to(
    input: impl Into<Input>,
    output: impl AsRef<Path>,
) -> Result<String, ConcatError> {
    let text = concatenate_sync(input)?;
    write_file(output.as_ref(), &text)?;
    Ok(text)
}
