//! Validate a template tree

use anyhow::Result;
use console::{style, Emoji};
use pagewright::PagewrightConfig;
use std::io::Write;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");

/// Load the whole tree and report how many pages compiled
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckCommand;

impl CheckCommand {
    /// Execute the command, returning the number of compiled pages
    ///
    /// # Errors
    ///
    /// Returns the load error if any template fails to read or parse.
    pub fn execute<W: Write>(self, config: &PagewrightConfig, out: &mut W) -> Result<usize> {
        let engine = super::load_engine(config)?;
        let count = engine.pages().len();

        writeln!(
            out,
            "{CHECK}Loaded {} {} from {}",
            style(count).bold(),
            if count == 1 { "page" } else { "pages" },
            style(engine.base_path().display()).cyan()
        )?;

        Ok(count)
    }
}
