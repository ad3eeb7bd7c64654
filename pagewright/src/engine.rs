//! Page engine: eager construction and rendering

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::TemplateSettings;
use crate::error::{LoadError, RenderError};
use crate::loader::Loader;
use crate::template::{PageRegistry, TemplateSet};

/// Loaded, immutable set of compiled pages
///
/// Every page under `pages/<category>/` is compiled at construction time
/// into its own [`TemplateSet`]. Afterwards the engine is read-only: it is
/// `Send + Sync`, clones share the same registry, and renders from any
/// number of threads need no locking.
///
/// # Example
///
/// ```rust,no_run
/// use pagewright::PageEngine;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = PageEngine::new("./templates")?;
///
/// let mut out = std::io::stdout().lock();
/// engine.render_page(&mut out, "app_layout", "home/index.html", ())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PageEngine {
    base_path: PathBuf,
    pages: Arc<PageRegistry>,
}

impl PageEngine {
    /// Load every page under `base_path` with default settings
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if `root.html` or the `pages/` directory is
    /// missing, or any file cannot be read or parsed. No engine is returned
    /// in that case.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        Self::with_settings(&TemplateSettings::new(base_path))
    }

    /// Load every page using explicit template settings
    ///
    /// # Errors
    ///
    /// Same as [`PageEngine::new`].
    pub fn with_settings(settings: &TemplateSettings) -> Result<Self, LoadError> {
        let pages = Loader::new(settings).load()?;

        tracing::debug!(
            base = %settings.base_dir.display(),
            pages = pages.len(),
            "page engine ready"
        );

        Ok(Self {
            base_path: settings.base_dir.clone(),
            pages: Arc::new(pages),
        })
    }

    /// Render `layout` for the page `page` into `out`
    ///
    /// `page` is the forward-slash key `category/filename`. Output is
    /// streamed as it is produced.
    ///
    /// # Errors
    ///
    /// - [`RenderError::NotFound`] if no such page was compiled; nothing is
    ///   written.
    /// - [`RenderError::Execution`] if the layout does not exist in the
    ///   page's set or fails while running; `out` may hold partial output.
    pub fn render_page<W, S>(
        &self,
        out: W,
        layout: &str,
        page: &str,
        data: S,
    ) -> Result<(), RenderError>
    where
        W: io::Write,
        S: Serialize,
    {
        let set = self.lookup(page)?;

        tracing::trace!(layout, page, "rendering page");
        set.execute(layout, data, out)
            .map_err(|source| execution_error(layout, page, source))
    }

    /// Render `layout` for the page `page` into a new string
    ///
    /// # Errors
    ///
    /// Same as [`PageEngine::render_page`], except that nothing is ever
    /// partially returned.
    pub fn render_page_to_string<S: Serialize>(
        &self,
        layout: &str,
        page: &str,
        data: S,
    ) -> Result<String, RenderError> {
        let set = self.lookup(page)?;

        tracing::trace!(layout, page, "rendering page");
        set.execute_to_string(layout, data)
            .map_err(|source| execution_error(layout, page, source))
    }

    fn lookup(&self, page: &str) -> Result<&TemplateSet, RenderError> {
        self.pages
            .get(page)
            .ok_or_else(|| RenderError::NotFound(page.to_string()))
    }

    /// Directory the pages were loaded from
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// All compiled pages
    #[must_use]
    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// Keys of all compiled pages, sorted
    pub fn page_keys(&self) -> impl Iterator<Item = &str> {
        self.pages.keys()
    }

    /// Whether a page was compiled under `page`
    #[must_use]
    pub fn contains_page(&self, page: &str) -> bool {
        self.pages.contains(page)
    }

    /// Template set compiled for `page`
    #[must_use]
    pub fn page(&self, page: &str) -> Option<&TemplateSet> {
        self.pages.get(page)
    }
}

fn execution_error(layout: &str, page: &str, source: minijinja::Error) -> RenderError {
    RenderError::Execution {
        layout: layout.to_string(),
        page: page.to_string(),
        source,
    }
}
