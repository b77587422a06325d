//! Frame document - one frame's parameter values stored as YAML
//!
//! ```yaml
//! title: Hallway frame
//! outer_width: 60
//! outer_length: 40
//! outer_height: 5
//! inner_height: 3
//! interval: 4
//! has_substrate: true
//! has_stand: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ParameterError;
use crate::core::frame::{FrameParameters, ParameterName};
use crate::yaml::{parse_yaml_file, YamlError};

/// File suffix for frame documents
pub const FRAME_FILE_SUFFIX: &str = ".frame.yaml";

/// A rejected assignment while applying values to a frame
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentFailure {
    pub parameter: ParameterName,
    pub value: f64,
    pub error: ParameterError,
}

impl std::fmt::Display for AssignmentFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            // out-of-range errors already name the parameter
            ParameterError::OutOfRange { .. } => write!(f, "{}", self.error),
            other => write!(f, "{} = {}: {}", self.parameter, self.value, other),
        }
    }
}

/// Parameter values of one frame; absent values keep the configured default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameDocument {
    /// Frame title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,

    /// Add a backing substrate
    #[serde(default)]
    pub has_substrate: bool,

    /// Add a desk stand
    #[serde(default)]
    pub has_stand: bool,
}

impl FrameDocument {
    /// Load a frame document from disk
    pub fn load(path: &Path) -> Result<Self, YamlError> {
        parse_yaml_file(path)
    }

    /// Capture the current values of a parameter set
    pub fn from_frame(frame: &FrameParameters) -> Self {
        let mut doc = Self {
            has_substrate: frame.has_substrate(),
            has_stand: frame.has_stand(),
            ..Self::default()
        };
        for name in ParameterName::ALL {
            doc.set_value(name, frame.get(name));
        }
        doc
    }

    pub fn value(&self, name: ParameterName) -> Option<f64> {
        match name {
            ParameterName::OuterWidth => self.outer_width,
            ParameterName::OuterLength => self.outer_length,
            ParameterName::OuterHeight => self.outer_height,
            ParameterName::InnerHeight => self.inner_height,
            ParameterName::Interval => self.interval,
        }
    }

    pub fn set_value(&mut self, name: ParameterName, value: f64) {
        let slot = match name {
            ParameterName::OuterWidth => &mut self.outer_width,
            ParameterName::OuterLength => &mut self.outer_length,
            ParameterName::OuterHeight => &mut self.outer_height,
            ParameterName::InnerHeight => &mut self.inner_height,
            ParameterName::Interval => &mut self.interval,
        };
        *slot = Some(value);
    }

    /// Assign every present value to `frame`
    ///
    /// Values go in [`ParameterName::ASSIGNMENT_ORDER`]. A rejected value
    /// doesn't stop the rest; all failures are returned.
    pub fn apply(&self, frame: &mut FrameParameters) -> Vec<AssignmentFailure> {
        frame.set_has_substrate(self.has_substrate);
        frame.set_has_stand(self.has_stand);

        ParameterName::ASSIGNMENT_ORDER
            .into_iter()
            .filter_map(|name| self.value(name).map(|value| (name, value)))
            .filter_map(|(parameter, value)| {
                frame
                    .set(parameter, value)
                    .err()
                    .map(|error| AssignmentFailure {
                        parameter,
                        value,
                        error,
                    })
            })
            .collect()
    }
}
