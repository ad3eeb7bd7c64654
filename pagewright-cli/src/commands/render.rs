//! Render a page to stdout or a file

use anyhow::{Context, Result};
use pagewright::PagewrightConfig;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render one page through a layout
#[derive(Debug, Clone)]
pub struct RenderCommand {
    /// Page key, `category/filename`
    pub page: String,
    /// Layout fragment; the configured default when `None`
    pub layout: Option<String>,
    /// JSON file used as the render context
    pub data: Option<PathBuf>,
    /// File to write instead of `out`
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Create a command rendering `page` with the default layout and no data
    #[must_use]
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            layout: None,
            data: None,
            output: None,
        }
    }

    /// Execute the command
    ///
    /// Writes to the `--output` file when one was given, otherwise to `out`.
    /// The file is only created once the page has rendered successfully.
    ///
    /// # Errors
    ///
    /// Returns error if the templates fail to load, the data file cannot be
    /// read, or rendering fails.
    pub fn execute<W: Write>(&self, config: &PagewrightConfig, out: &mut W) -> Result<()> {
        let engine = super::load_engine(config)?;
        let layout = self
            .layout
            .as_deref()
            .unwrap_or(config.render.default_layout.as_str());
        let data = match &self.data {
            Some(path) => load_data(path)?,
            None => Value::Null,
        };

        match &self.output {
            Some(path) => {
                // Render fully before touching the file so a failed render
                // leaves an existing output in place.
                let mut rendered = Vec::new();
                engine.render_page(&mut rendered, layout, &self.page, &data)?;

                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                writer
                    .write_all(&rendered)
                    .and_then(|()| writer.flush())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            None => {
                engine.render_page(&mut *out, layout, &self.page, &data)?;
                out.flush().context("Failed to flush output")?;
            }
        }

        tracing::info!(page = %self.page, layout, "rendered page");
        Ok(())
    }
}

/// Read a JSON render context
fn load_data(path: &Path) -> Result<Value> {
    let file =
        File::open(path).with_context(|| format!("Failed to open data file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse data file {}", path.display()))
}
