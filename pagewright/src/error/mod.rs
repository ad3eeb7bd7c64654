//! Error types for loading and rendering page templates

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::template::FragmentError;

/// Construction phase a [`LoadError`] happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Parsing `root.html`
    Root,
    /// Parsing `partials/*.html`
    Partials,
    /// Parsing `layouts/*.html`
    Layouts,
    /// Walking `pages/` and compiling each page
    Pages,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Root => "root template",
            Self::Partials => "partials",
            Self::Layouts => "layouts",
            Self::Pages => "page templates",
        })
    }
}

/// Failure while building the page registry
///
/// Construction is all-or-nothing, so any of these aborts the whole engine.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required directory does not exist
    #[error("failed to load {phase}: missing directory {}", .path.display())]
    MissingDirectory {
        /// Phase that needed the directory
        phase: Phase,
        /// Directory that was expected
        path: PathBuf,
    },

    /// A directory exists but could not be listed
    #[error("failed to load {phase}: could not read directory {}: {source}", .path.display())]
    ReadDir {
        /// Phase that listed the directory
        phase: Phase,
        /// Directory being listed
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// An entry directly under `pages/` is not a category directory
    #[error("failed to load {phase}: {} is not a directory", .path.display())]
    NotADirectory {
        /// Phase that found the entry
        phase: Phase,
        /// Offending entry
        path: PathBuf,
    },

    /// A page category or file name is not valid UTF-8
    #[error("failed to load {phase}: {} is not a valid UTF-8 name", .path.display())]
    InvalidName {
        /// Phase that found the entry
        phase: Phase,
        /// Offending entry
        path: PathBuf,
    },

    /// A template file could not be read
    #[error("failed to load {phase}: could not read {}: {source}", .path.display())]
    ReadFile {
        /// Phase that read the file
        phase: Phase,
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file has malformed define blocks
    #[error("failed to load {phase}: malformed fragment in {}: {source}", .path.display())]
    Fragment {
        /// Phase that parsed the file
        phase: Phase,
        /// File being parsed
        path: PathBuf,
        /// What was wrong with the define structure
        #[source]
        source: FragmentError,
    },

    /// A fragment is not a valid template
    #[error("failed to load {phase}: failed to parse {}: {source}", .path.display())]
    Parse {
        /// Phase that parsed the file
        phase: Phase,
        /// File being parsed
        path: PathBuf,
        /// Syntax error reported by the template engine
        #[source]
        source: minijinja::Error,
    },
}

impl LoadError {
    /// Phase the failure happened in
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::MissingDirectory { phase, .. }
            | Self::ReadDir { phase, .. }
            | Self::NotADirectory { phase, .. }
            | Self::InvalidName { phase, .. }
            | Self::ReadFile { phase, .. }
            | Self::Fragment { phase, .. }
            | Self::Parse { phase, .. } => *phase,
        }
    }

    /// File or directory that triggered the failure
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingDirectory { path, .. }
            | Self::ReadDir { path, .. }
            | Self::NotADirectory { path, .. }
            | Self::InvalidName { path, .. }
            | Self::ReadFile { path, .. }
            | Self::Fragment { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }
}

/// Failure while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    /// No page was compiled under this key; nothing was written
    #[error("page template not found: {0}")]
    NotFound(String),

    /// The layout is unknown or failed while executing
    ///
    /// The destination may already hold part of the output.
    #[error("failed to render layout '{layout}' for page '{page}': {source}")]
    Execution {
        /// Layout fragment that was executed
        layout: String,
        /// Page key it was executed for
        page: String,
        /// Error reported by the template engine
        #[source]
        source: minijinja::Error,
    },
}

impl RenderError {
    /// Whether the page key was unknown
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Any pagewright error
#[derive(Debug, Error)]
pub enum Error {
    /// Construction failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),
}
