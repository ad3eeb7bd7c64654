//! CLI command implementations

pub mod check;
pub mod list;
pub mod render;

pub use check::CheckCommand;
pub use list::ListCommand;
pub use render::RenderCommand;

use anyhow::{Context, Result};
use pagewright::{PageEngine, PagewrightConfig};

/// Load the template tree named by the configuration
fn load_engine(config: &PagewrightConfig) -> Result<PageEngine> {
    PageEngine::with_settings(&config.templates).with_context(|| {
        format!(
            "Failed to load templates from {}",
            config.templates.base_dir.display()
        )
    })
}
