//! pagewright CLI library

#![forbid(unsafe_code)]

pub mod commands;
pub mod observability;

pub use commands::{CheckCommand, ListCommand, RenderCommand};
