//! List compiled pages

use anyhow::Result;
use pagewright::PagewrightConfig;
use std::io::Write;

/// Print every page key, optionally with its fragment names
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand {
    /// Also print the fragments each page can use
    pub fragments: bool,
}

impl ListCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns error if the templates fail to load or `out` cannot be
    /// written.
    pub fn execute<W: Write>(self, config: &PagewrightConfig, out: &mut W) -> Result<()> {
        let engine = super::load_engine(config)?;

        for (key, set) in engine.pages().iter() {
            writeln!(out, "{key}")?;
            if self.fragments {
                for name in set.fragment_names() {
                    writeln!(out, "  {name}")?;
                }
            }
        }

        Ok(())
    }
}
