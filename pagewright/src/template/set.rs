//! Template definition sets
//!
//! A [`TemplateSet`] is a namespace of named fragments backed by one
//! minijinja environment. Sets are never extended in place once something
//! has been derived from them: [`TemplateSet::derive`] produces an
//! independent copy that shares the already compiled fragments of its parent
//! and keeps its own additions to itself.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::io;
use std::path::Path;

use super::fragment::{self, Fragment, FragmentError};
use crate::config::TemplateSettings;
use crate::error::{LoadError, Phase};

/// A named collection of fragments that can include each other
#[derive(Debug, Clone)]
pub struct TemplateSet {
    env: Environment<'static>,
}

/// Why a source could not be added to a set
#[derive(Debug)]
enum ParseError {
    Fragment(FragmentError),
    Syntax(minijinja::Error),
}

impl From<FragmentError> for ParseError {
    fn from(err: FragmentError) -> Self {
        Self::Fragment(err)
    }
}

impl From<minijinja::Error> for ParseError {
    fn from(err: minijinja::Error) -> Self {
        Self::Syntax(err)
    }
}

impl TemplateSet {
    /// Create an empty set configured from the template settings
    pub(crate) fn new(settings: &TemplateSettings) -> Self {
        let mut env = Environment::new();

        env.set_trim_blocks(settings.trim_blocks);
        env.set_lstrip_blocks(settings.lstrip_blocks);
        env.set_undefined_behavior(if settings.strict_undefined {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Lenient
        });

        // Fragment names carry no file extension, so escaping is decided
        // for the whole set instead of per name.
        let autoescape = settings.autoescape;
        env.set_auto_escape_callback(move |_| {
            if autoescape {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        Self { env }
    }

    /// Copy this set into a new one that can be extended independently
    pub(crate) fn derive(&self) -> Self {
        self.clone()
    }

    /// Read a template file and add its fragments to this set
    ///
    /// The file's top-level body is registered under its file name.
    pub(crate) fn parse_file(&mut self, phase: Phase, path: &Path) -> Result<(), LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
            phase,
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::trace!(%phase, path = %path.display(), "parsing template file");

        self.parse_source(&file_name, &source)
            .map_err(|err| match err {
                ParseError::Fragment(source) => LoadError::Fragment {
                    phase,
                    path: path.to_path_buf(),
                    source,
                },
                ParseError::Syntax(source) => LoadError::Parse {
                    phase,
                    path: path.to_path_buf(),
                    source,
                },
            })
    }

    fn parse_source(&mut self, file_name: &str, source: &str) -> Result<(), ParseError> {
        let file = fragment::split(source)?;

        self.define(file_name.to_string(), file.body)?;
        for Fragment { name, source } in file.fragments {
            self.define(name, source)?;
        }

        Ok(())
    }

    /// Register a fragment, replacing any earlier one of the same name
    ///
    /// A blank definition never replaces an existing fragment.
    fn define(&mut self, name: String, source: String) -> Result<(), minijinja::Error> {
        if fragment::is_blank(&source) && self.contains(&name) {
            return Ok(());
        }
        self.env.add_template_owned(name, source)
    }

    /// Whether a fragment with this name is defined
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Names of every fragment in the set, sorted
    #[must_use]
    pub fn fragment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }

    /// Number of fragments in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.env.templates().count()
    }

    /// Whether the set has no fragments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Execute a fragment, streaming the output into `out`
    pub(crate) fn execute<S, W>(&self, name: &str, ctx: S, out: W) -> Result<(), minijinja::Error>
    where
        S: Serialize,
        W: io::Write,
    {
        let template = self.env.get_template(name)?;
        template.render_to_write(ctx, out).map(|_| ())
    }

    /// Execute a fragment into a string
    pub(crate) fn execute_to_string<S: Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
