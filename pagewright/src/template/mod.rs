//! Template definition sets and the page registry
//!
//! Files are split into named fragments (see [`fragment`]) which are added
//! to a [`TemplateSet`]. Sets are derived root → partials → layouts → page,
//! and the compiled page sets are kept in a [`PageRegistry`].

pub mod fragment;
pub mod registry;
pub mod set;

pub use fragment::FragmentError;
pub use registry::PageRegistry;
pub use set::TemplateSet;
