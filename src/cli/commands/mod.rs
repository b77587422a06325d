//! CLI command implementations

pub mod build;
pub mod check;
pub mod completions;
pub mod new;
pub mod probe;
pub mod show;
pub mod utils;
