//! PFT: Photo Frame Toolkit
//!
//! Parametrize a picture frame, check its dimensions against their ranges and
//! consistency laws, and hand validated parameters to a geometry builder.

pub mod cli;
pub mod core;
pub mod entities;
pub mod schema;
pub mod yaml;
