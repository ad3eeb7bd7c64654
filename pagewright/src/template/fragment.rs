//! Named fragment extraction
//!
//! A template file declares fragments with define blocks:
//!
//! ```text
//! {% define "header" %}<header>{{ Title }}</header>{% enddefine %}
//! ```
//!
//! Text outside every define block is the file's own body. Fragment sources
//! are handed to minijinja untouched, one template per fragment; the define
//! tags themselves never reach the template engine. `{%-` and `-%}` on a
//! define tag trim the neighbouring whitespace just like they do on
//! minijinja's own tags. Define tags inside `{# ... #}` comments and
//! `{% raw %}` blocks are not tags at all; those spans are copied through
//! verbatim.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

/// Matches `{% define "name" %}`, `{% define 'name' %}` and `{% enddefine %}`
/// with optional whitespace-control markers, plus whole comments and raw
/// blocks so that tags inside them are skipped.
static DEFINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)\{#.*?#\}",
        r"|\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\}",
        r#"|\{%(?P<open>-?)\s*(?:define\s+(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')|(?P<end>enddefine))\s*(?P<close>-?)%\}"#,
    ))
    .expect("Invalid regex")
});

/// Malformed define structure in a template file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// A define block was opened inside another one
    #[error("line {line}: define \"{name}\" is nested inside define \"{outer}\"")]
    Nested {
        /// Name of the inner block
        name: String,
        /// Name of the block that was still open
        outer: String,
        /// 1-based line of the inner define tag
        line: usize,
    },

    /// `enddefine` appeared while no define block was open
    #[error("line {line}: enddefine without a matching define")]
    UnmatchedEnd {
        /// 1-based line of the stray tag
        line: usize,
    },

    /// The file ended with a define block still open
    #[error("line {line}: define \"{name}\" is never closed")]
    Unclosed {
        /// Name of the open block
        name: String,
        /// 1-based line of its define tag
        line: usize,
    },

    /// A define tag with a blank name
    #[error("line {line}: fragment name must not be empty")]
    EmptyName {
        /// 1-based line of the define tag
        line: usize,
    },
}

/// One named fragment extracted from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Name other fragments include it by
    pub name: String,
    /// Template source between the define tags
    pub source: String,
}

/// A template file split into its fragments and top-level body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitFile {
    /// Fragments in the order they appear in the file
    pub fragments: Vec<Fragment>,
    /// Everything outside the define blocks
    pub body: String,
}

struct OpenBlock {
    name: String,
    line: usize,
    source: String,
}

/// Split a template source into named fragments and the remaining body
///
/// # Errors
///
/// Returns [`FragmentError`] when define blocks are nested, unbalanced or
/// unnamed.
pub fn split(source: &str) -> Result<SplitFile, FragmentError> {
    let mut file = SplitFile::default();
    let mut open: Option<OpenBlock> = None;
    let mut cursor = 0;
    let mut trim_next = false;

    for caps in DEFINE_TAG.captures_iter(source) {
        let Some(tag) = caps.get(0) else { continue };
        // comment or raw block
        if caps.name("open").is_none() {
            continue;
        }
        let line = line_of(source, tag.start());

        let text = trim(&source[cursor..tag.start()], trim_next, marker(&caps, "open"));
        match open.as_mut() {
            Some(block) => block.source.push_str(text),
            None => file.body.push_str(text),
        }

        if caps.name("end").is_some() {
            let Some(block) = open.take() else {
                return Err(FragmentError::UnmatchedEnd { line });
            };
            file.fragments.push(Fragment {
                name: block.name,
                source: block.source,
            });
        } else {
            let name = caps
                .name("dq")
                .or_else(|| caps.name("sq"))
                .map_or("", |m| m.as_str());
            if name.trim().is_empty() {
                return Err(FragmentError::EmptyName { line });
            }
            if let Some(outer) = &open {
                return Err(FragmentError::Nested {
                    name: name.to_string(),
                    outer: outer.name.clone(),
                    line,
                });
            }
            open = Some(OpenBlock {
                name: name.to_string(),
                line,
                source: String::new(),
            });
        }

        trim_next = marker(&caps, "close");
        cursor = tag.end();
    }

    let tail = trim(&source[cursor..], trim_next, false);
    match open {
        Some(block) => Err(FragmentError::Unclosed {
            name: block.name,
            line: block.line,
        }),
        None => {
            file.body.push_str(tail);
            Ok(file)
        }
    }
}

/// Whether a fragment source has nothing but whitespace in it
#[must_use]
pub fn is_blank(source: &str) -> bool {
    source.trim().is_empty()
}

fn marker(caps: &Captures<'_>, group: &str) -> bool {
    caps.name(group).is_some_and(|m| m.as_str() == "-")
}

fn trim(text: &str, start: bool, end: bool) -> &str {
    let text = if start { text.trim_start() } else { text };
    if end {
        text.trim_end()
    } else {
        text
    }
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}
