//! Shared fixtures: twenty numbered files `00.txt` … `19.txt`.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    /// Creates `00.txt` through `19.txt`, each containing `This is file "NN".`
    pub fn numbered() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create fixture dir");
        for index in 0..20 {
            let name = format!("{:02}", index);
            fs::write(dir.path().join(format!("{}.txt", name)), contents(&name))
                .expect("Failed to write fixture");
        }
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn pattern(&self, pattern: &str) -> String {
        self.path(pattern).to_string_lossy().into_owned()
    }

    pub fn first_four(&self) -> Vec<PathBuf> {
        ["01.txt", "02.txt", "03.txt", "04.txt"]
            .iter()
            .map(|name| self.path(name))
            .collect()
    }
}

pub fn contents(name: &str) -> String {
    format!("This is file \"{}\".", name)
}

/// The expected joined text for the given fixture numbers.
pub fn expected(range: impl IntoIterator<Item = usize>) -> String {
    range
        .into_iter()
        .map(|index| contents(&format!("{:02}", index)))
        .collect::<Vec<_>>()
        .join("\n")
}
