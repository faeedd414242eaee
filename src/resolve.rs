// src/resolve.rs
//! Turns paths and glob patterns into the ordered list of files to read.
//!
//! Each entry is expanded on its own and its matches are sorted, then the
//! expansions are laid end to end in entry order. An entry that matches
//! nothing is an error rather than a silent gap in the output.

use crate::error::{ConcatError, PatternFailure};
use crate::executor::fan_in;
use crate::input::Input;
use std::path::PathBuf;

/// Concrete files to concatenate, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFileList {
    paths: Vec<PathBuf>,
}

impl ResolvedFileList {
    fn from_expansions(expansions: Vec<Vec<PathBuf>>) -> Self {
        Self {
            paths: expansions.into_iter().flatten().collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a ResolvedFileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Expands a single path or pattern into its lexicographically sorted matches.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, ConcatError> {
    let matches = glob::glob(pattern).map_err(|e| ConcatError::pattern(pattern, e))?;

    let mut paths = matches
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConcatError::pattern(pattern, e))?;

    if paths.is_empty() {
        return Err(ConcatError::pattern(pattern, PatternFailure::NoMatches));
    }

    // By the whole path string, not component-wise: `a-b/x` precedes `a/x`.
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    log::debug!("Pattern '{}' matched {} path(s)", pattern, paths.len());
    Ok(paths)
}

/// Resolves every entry in order, stopping at the first one that fails.
pub fn resolve(input: &Input) -> Result<ResolvedFileList, ConcatError> {
    ensure_entries(input)?;

    let expansions = input
        .entries()
        .iter()
        .map(|entry| expand_pattern(entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedFileList::from_expansions(expansions))
}

/// Resolves every entry concurrently, one blocking glob task per entry.
///
/// The first entry to fail, in time, decides the error. Matches are still
/// laid out in entry order regardless of which expansion finishes first.
pub async fn resolve_concurrent(input: &Input) -> Result<ResolvedFileList, ConcatError> {
    ensure_entries(input)?;

    let expansions = fan_in::fan_out(input.entries().to_vec(), |entry| async move {
        match tokio::task::spawn_blocking(move || expand_pattern(&entry)).await {
            Ok(expansion) => expansion,
            Err(e) => Err(ConcatError::TaskFailed {
                message: format!("pattern expansion panicked: {}", e),
            }),
        }
    })
    .await?;

    Ok(ResolvedFileList::from_expansions(expansions))
}

fn ensure_entries(input: &Input) -> Result<(), ConcatError> {
    if input.is_empty() {
        return Err(ConcatError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), name).unwrap();
        }
        dir
    }

    fn pattern_in(dir: &tempfile::TempDir, pattern: &str) -> String {
        dir.path().join(pattern).to_string_lossy().into_owned()
    }

    #[test]
    fn expansion_is_sorted() {
        let dir = fixture_dir(&["c.txt", "a.txt", "b.txt", "skip.md"]);
        let paths = expand_pattern(&pattern_in(&dir, "*.txt")).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn expansion_across_directories_sorts_by_full_path() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["a", "a-b"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join("x.txt"), sub).unwrap();
        }

        let paths = expand_pattern(&pattern_in(&dir, "*/x.txt")).unwrap();

        assert_eq!(
            paths,
            [dir.path().join("a-b/x.txt"), dir.path().join("a/x.txt")]
        );
    }

    #[test]
    fn literal_path_matches_itself() {
        let dir = fixture_dir(&["only.txt"]);
        let literal = pattern_in(&dir, "only.txt");
        assert_eq!(expand_pattern(&literal).unwrap(), [PathBuf::from(&literal)]);
    }

    #[test]
    fn zero_matches_is_an_error() {
        let dir = fixture_dir(&["a.txt"]);
        let err = expand_pattern(&pattern_in(&dir, "*.md")).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        let err = expand_pattern("[unclosed").unwrap_err();
        assert_eq!(err.failed_pattern(), Some("[unclosed"));
        assert!(!err.is_no_match());
    }

    #[test]
    fn entries_keep_their_order() {
        let dir = fixture_dir(&["a1.txt", "a2.txt", "b1.txt", "b2.txt"]);
        let input = Input::from(vec![pattern_in(&dir, "b*.txt"), pattern_in(&dir, "a*.txt")]);
        let resolved = resolve(&input).unwrap();
        let names: Vec<_> = resolved
            .paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["b1.txt", "b2.txt", "a1.txt", "a2.txt"]);
    }

    #[test]
    fn first_failing_entry_stops_resolution() {
        let dir = fixture_dir(&["a.txt"]);
        let input = Input::from(vec![
            pattern_in(&dir, "a.txt"),
            pattern_in(&dir, "missing-1"),
            pattern_in(&dir, "missing-2"),
        ]);
        let err = resolve(&input).unwrap_err();
        assert_eq!(err.failed_pattern(), Some(pattern_in(&dir, "missing-1").as_str()));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = resolve(&Input::Sequence(Vec::new())).unwrap_err();
        assert!(matches!(err, ConcatError::EmptyInput));
    }

    #[tokio::test]
    async fn concurrent_resolution_matches_sequential() {
        let dir = fixture_dir(&["x2.txt", "x1.txt", "y1.txt", "y3.txt", "y2.txt"]);
        let input = Input::from(vec![pattern_in(&dir, "y*.txt"), pattern_in(&dir, "x*.txt")]);
        let concurrent = resolve_concurrent(&input).await.unwrap();
        assert_eq!(concurrent, resolve(&input).unwrap());
        assert_eq!(concurrent.len(), 5);
    }

    #[tokio::test]
    async fn concurrent_resolution_reports_one_error() {
        let dir = fixture_dir(&["a.txt"]);
        let input = Input::from(vec![
            pattern_in(&dir, "*"),
            pattern_in(&dir, "lol not here"),
            pattern_in(&dir, "lol still not here"),
        ]);
        let err = resolve_concurrent(&input).await.unwrap_err();
        assert!(err.is_no_match());
    }
}
