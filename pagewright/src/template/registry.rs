//! Registry of compiled page template sets
//!
//! Filled once while the engine is constructed and read-only afterwards.

use std::collections::BTreeMap;

use super::TemplateSet;

/// Compiled page sets keyed by `category/filename`
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: BTreeMap<String, TemplateSet>,
}

impl PageRegistry {
    /// Create an empty registry
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a compiled page
    pub(crate) fn insert(&mut self, key: String, set: TemplateSet) {
        self.pages.insert(key, set);
    }

    /// Get the template set compiled for a page
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TemplateSet> {
        self.pages.get(key)
    }

    /// Whether a page was compiled under this key
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Page keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Page keys with their template sets, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateSet)> {
        self.pages.iter().map(|(key, set)| (key.as_str(), set))
    }

    /// Number of compiled pages
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages were compiled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
