//! Template tree loader
//!
//! Builds the page registry from the directory convention:
//!
//! ```text
//! <base>/root.html                      required
//! <base>/partials/*.html                optional
//! <base>/layouts/*.html                 expected
//! <base>/pages/<category>/<file>        required
//! ```
//!
//! Each phase derives a fresh set from the previous one before parsing into
//! it, so every page ends up with its own namespace on top of the shared
//! root, partials and layouts.

mod walk;

use std::path::Path;
use walkdir::DirEntry;

use crate::config::TemplateSettings;
use crate::error::{LoadError, Phase};
use crate::template::{PageRegistry, TemplateSet};

/// Root shell file name
pub const ROOT_FILE: &str = "root.html";
/// Directory of reusable fragments
pub const PARTIALS_DIR: &str = "partials";
/// Directory of layout fragments
pub const LAYOUTS_DIR: &str = "layouts";
/// Directory of page categories
pub const PAGES_DIR: &str = "pages";

/// Loads a template tree into a [`PageRegistry`]
pub(crate) struct Loader<'a> {
    settings: &'a TemplateSettings,
}

impl<'a> Loader<'a> {
    pub(crate) const fn new(settings: &'a TemplateSettings) -> Self {
        Self { settings }
    }

    fn base(&self) -> &Path {
        &self.settings.base_dir
    }

    /// Run every phase in order and return the compiled pages
    pub(crate) fn load(&self) -> Result<PageRegistry, LoadError> {
        let root = self.load_root()?;
        let partials = self.load_partials(&root)?;
        let layouts = self.load_layouts(&partials)?;
        self.compile_pages(&layouts)
    }

    fn load_root(&self) -> Result<TemplateSet, LoadError> {
        let mut root = TemplateSet::new(self.settings);
        root.parse_file(Phase::Root, &self.base().join(ROOT_FILE))?;

        tracing::debug!(fragments = root.len(), "loaded root template");
        Ok(root)
    }

    fn load_partials(&self, root: &TemplateSet) -> Result<TemplateSet, LoadError> {
        self.extend(root, Phase::Partials, &self.base().join(PARTIALS_DIR))
    }

    fn load_layouts(&self, partials: &TemplateSet) -> Result<TemplateSet, LoadError> {
        self.extend(partials, Phase::Layouts, &self.base().join(LAYOUTS_DIR))
    }

    /// Derive from `parent` and parse every `*.html` in `dir` into the copy
    fn extend(
        &self,
        parent: &TemplateSet,
        phase: Phase,
        dir: &Path,
    ) -> Result<TemplateSet, LoadError> {
        let mut set = parent.derive();

        let files = walk::html_files(phase, dir)?;
        for path in &files {
            set.parse_file(phase, path)?;
        }

        tracing::debug!(%phase, files = files.len(), fragments = set.len(), "loaded templates");
        Ok(set)
    }

    /// Compile one template set per page file
    fn compile_pages(&self, layouts: &TemplateSet) -> Result<PageRegistry, LoadError> {
        let pages_dir = self.base().join(PAGES_DIR);
        if !pages_dir.exists() {
            return Err(LoadError::MissingDirectory {
                phase: Phase::Pages,
                path: pages_dir,
            });
        }
        if !pages_dir.is_dir() {
            return Err(LoadError::NotADirectory {
                phase: Phase::Pages,
                path: pages_dir,
            });
        }

        let mut registry = PageRegistry::new();

        for category in walk::entries(Phase::Pages, &pages_dir)? {
            if !category.file_type().is_dir() {
                return Err(LoadError::NotADirectory {
                    phase: Phase::Pages,
                    path: category.into_path(),
                });
            }
            let category_name = utf8_name(&category)?;

            for leaf in walk::entries(Phase::Pages, category.path())? {
                if leaf.file_type().is_dir() {
                    tracing::trace!(path = %leaf.path().display(), "skipping nested directory");
                    continue;
                }

                let key = format!("{category_name}/{}", utf8_name(&leaf)?);
                let mut page = layouts.derive();
                page.parse_file(Phase::Pages, leaf.path())?;

                tracing::trace!(page = %key, "compiled page");
                registry.insert(key, page);
            }
        }

        tracing::debug!(pages = registry.len(), "compiled page templates");
        Ok(registry)
    }
}

/// Page keys are built from entry names, so they must be valid UTF-8
fn utf8_name(entry: &DirEntry) -> Result<&str, LoadError> {
    entry
        .file_name()
        .to_str()
        .ok_or_else(|| LoadError::InvalidName {
            phase: Phase::Pages,
            path: entry.path().to_path_buf(),
        })
}
