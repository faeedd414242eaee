// src/constants.rs
//! Domain constants that define how concatenated text is laid out and where
//! the command-line tool keeps its side files.

// ---------------------------------------------------------------------------
// Output layout
// ---------------------------------------------------------------------------

/// Placed between the contents of consecutive files.
///
/// Never appended after the last file, so a single input comes back
/// byte-for-byte unchanged.
pub const SEPARATOR: &str = "\n";

// ---------------------------------------------------------------------------
// Command-line tool
// ---------------------------------------------------------------------------

/// File name of the debug log written under the system temp directory.
pub const LOG_FILE_NAME: &str = "concatenate.log";

/// Environment variable that overrides the debug log location.
pub const LOG_FILE_ENV: &str = "CONCATENATE_LOG_FILE";
