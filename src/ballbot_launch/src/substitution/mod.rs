//! Substitution module

pub mod context;
pub mod types;

pub use context::LaunchContext;
pub use types::{format_substitutions, resolve_substitutions, Substitution};
