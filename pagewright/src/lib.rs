//! pagewright: convention-driven HTML page templates
//!
//! A template tree is laid out as:
//!
//! ```text
//! <base>/root.html                      outer document shell
//! <base>/partials/*.html                reusable fragments
//! <base>/layouts/*.html                 named layouts
//! <base>/pages/<category>/<file>.html   page contents
//! ```
//!
//! Files declare named fragments with `{% define "name" %}...{% enddefine %}`
//! and use each other with `{% include "name" %}`; everything else is plain
//! [minijinja](https://docs.rs/minijinja) syntax.
//!
//! At construction the root set is loaded, then cloned and extended with the
//! partials, cloned again and extended with the layouts, and finally cloned
//! once per page file and extended with that page. Each page therefore owns
//! an isolated namespace while sharing the compiled fragments of its
//! ancestors. Rendering executes a layout inside one page's namespace.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagewright::PageEngine;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = PageEngine::new("./templates")?;
//!
//! let html = engine.render_page_to_string(
//!     "app_layout",
//!     "home/index.html",
//!     json!({ "Title": "Welcome" }),
//! )?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod template;

pub use config::{PagewrightConfig, RenderSettings, TemplateSettings};
pub use engine::PageEngine;
pub use error::{Error, LoadError, Phase, RenderError};
pub use template::{FragmentError, PageRegistry, TemplateSet};

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! ```rust
    //! use pagewright::prelude::*;
    //! ```

    pub use crate::config::{PagewrightConfig, TemplateSettings};
    pub use crate::engine::PageEngine;
    pub use crate::error::{LoadError, RenderError};

    pub use minijinja::context;
}
