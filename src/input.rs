// src/input.rs
//! The "one path or many" argument accepted by every entry point.

use std::path::{Path, PathBuf};

/// Paths and glob patterns to concatenate, in the order they should appear.
///
/// A literal path is treated as a pattern that matches itself, so the two
/// can be mixed freely within a [`Input::Sequence`].
///
/// Entries are glob patterns and therefore UTF-8. Paths given as `Path` or
/// `PathBuf` are converted lossily: a path that is not valid UTF-8 has its
/// invalid bytes replaced with `U+FFFD`, no longer names the original file,
/// and fails to resolve with [`PatternFailure::NoMatches`].
///
/// [`PatternFailure::NoMatches`]: crate::PatternFailure::NoMatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Single(String),
    Sequence(Vec<String>),
}

impl Input {
    /// Normalizes to an ordered list of entries.
    pub fn entries(&self) -> &[String] {
        match self {
            Self::Single(entry) => std::slice::from_ref(entry),
            Self::Sequence(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl From<&str> for Input {
    fn from(entry: &str) -> Self {
        Self::Single(entry.to_string())
    }
}

impl From<String> for Input {
    fn from(entry: String) -> Self {
        Self::Single(entry)
    }
}

impl From<&String> for Input {
    fn from(entry: &String) -> Self {
        Self::Single(entry.clone())
    }
}

impl From<&Path> for Input {
    fn from(path: &Path) -> Self {
        Self::Single(lossy(path))
    }
}

/// Lossy for non-UTF-8 paths; see [`Input`].
impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self::Single(lossy(&path))
    }
}

impl From<&PathBuf> for Input {
    fn from(path: &PathBuf) -> Self {
        Self::Single(lossy(path))
    }
}

impl From<Vec<String>> for Input {
    fn from(entries: Vec<String>) -> Self {
        Self::Sequence(entries)
    }
}

impl From<Vec<&str>> for Input {
    fn from(entries: Vec<&str>) -> Self {
        Self::Sequence(entries.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<PathBuf>> for Input {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Sequence(paths.iter().map(|p| lossy(p)).collect())
    }
}

impl From<&[String]> for Input {
    fn from(entries: &[String]) -> Self {
        Self::Sequence(entries.to_vec())
    }
}

impl From<&[&str]> for Input {
    fn from(entries: &[&str]) -> Self {
        Self::Sequence(entries.iter().map(|e| e.to_string()).collect())
    }
}

impl From<&[PathBuf]> for Input {
    fn from(paths: &[PathBuf]) -> Self {
        Self::Sequence(paths.iter().map(|p| lossy(p)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(entries: [&str; N]) -> Self {
        Self::Sequence(entries.iter().map(|e| e.to_string()).collect())
    }
}

impl<const N: usize> From<[PathBuf; N]> for Input {
    fn from(paths: [PathBuf; N]) -> Self {
        Self::Sequence(paths.iter().map(|p| lossy(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_entry_normalizes_to_one_element() {
        let input = Input::from("notes/*.txt");
        assert_eq!(input.entries(), ["notes/*.txt".to_string()]);
        assert!(!input.is_empty());
    }

    #[test]
    fn sequence_keeps_order() {
        let input = Input::from(["b.txt", "a.txt", "*.md"]);
        assert_eq!(input.entries(), ["b.txt", "a.txt", "*.md"]);
    }

    #[test]
    fn paths_convert_lossily() {
        let input = Input::from(vec![PathBuf::from("dir/01.txt"), PathBuf::from("dir/0*.txt")]);
        assert_eq!(
            input,
            Input::Sequence(vec!["dir/01.txt".to_string(), "dir/0*.txt".to_string()])
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_replaced_and_never_matches() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.txt");
        let path = dir.path().join(name);
        // Some filesystems refuse non-UTF-8 names outright.
        if std::fs::write(&path, "text").is_err() {
            return;
        }

        let input = Input::from(path);
        assert!(input.entries()[0].ends_with("caf\u{FFFD}.txt"));

        let err = crate::resolve(&input).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn empty_sequence_is_empty() {
        assert!(Input::from(Vec::<String>::new()).is_empty());
    }
}
