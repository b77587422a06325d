//! Document templates

pub mod template;

pub use template::{TemplateContext, TemplateError, TemplateGenerator};
