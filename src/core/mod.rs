//! Core module - the parameter validation core and its surroundings

pub mod bounded;
pub mod builder;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use bounded::BoundedValue;
pub use builder::{render_sheet, BuildError, BuildSheet, FrameBuilder, SheetBuilder, SheetFormat};
pub use config::{Config, ConfigError, Limit, Limits};
pub use error::{ParameterError, RangeSide};
pub use frame::{ConsistencyRule, DerivedParameter, FieldStatus, FrameParameters, ParameterName};
pub use traits::{ParameterSet, Validatable};
