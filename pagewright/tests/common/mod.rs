//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of the static fixture tree
pub fn fixture_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site")
}

/// Throwaway template tree on disk
pub struct TemplateTree {
    dir: TempDir,
}

impl TemplateTree {
    /// Empty tree with nothing in it
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Tree with a root shell, one `main` layout and no pages yet
    pub fn minimal() -> Self {
        Self::empty()
            .file(
                "root.html",
                "{% define \"open\" %}<html>{% enddefine %}{% define \"close\" %}</html>{% enddefine %}",
            )
            .file(
                "layouts/main.html",
                "{% define \"main\" %}{% include \"open\" %}{% include \"content\" %}{% include \"close\" %}{% enddefine %}",
            )
    }

    /// Write `contents` to `rel`, creating parent directories
    #[must_use]
    pub fn file(self, rel: &str, contents: &str) -> Self {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    /// Create an empty directory at `rel`
    #[must_use]
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
