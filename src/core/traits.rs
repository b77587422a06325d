//! Capability traits implemented by the frame parameter set
//!
//! Consumers that only need to know whether a frame is usable take
//! `impl Validatable`; consumers that read or edit dimensions take
//! `impl ParameterSet`.

use crate::core::error::ParameterError;
use crate::core::frame::{ConsistencyRule, FrameParameters};

/// Read-only validity check
pub trait Validatable {
    /// Whether the whole parameter set is currently usable
    fn is_valid(&self) -> bool;
}

/// Read/write access to frame dimensions
pub trait ParameterSet {
    fn outer_width(&self) -> f64;
    fn outer_height(&self) -> f64;
    fn outer_length(&self) -> f64;
    fn inner_height(&self) -> f64;
    fn interval(&self) -> f64;

    fn set_outer_width(&mut self, value: f64) -> Result<(), ParameterError>;
    fn set_outer_height(&mut self, value: f64) -> Result<(), ParameterError>;
    fn set_outer_length(&mut self, value: f64) -> Result<(), ParameterError>;
    fn set_inner_height(&mut self, value: f64) -> Result<(), ParameterError>;
    fn set_interval(&mut self, value: f64) -> Result<(), ParameterError>;

    /// `outer_width - 2 * interval`
    fn inner_width(&self) -> Result<f64, ParameterError>;

    /// `outer_length - 2 * interval`
    fn inner_length(&self) -> Result<f64, ParameterError>;

    fn has_substrate(&self) -> bool;
    fn has_stand(&self) -> bool;

    /// Consistency law the derived values are checked against
    fn rule(&self) -> ConsistencyRule;
}

impl Validatable for FrameParameters {
    fn is_valid(&self) -> bool {
        FrameParameters::is_valid(self)
    }
}

impl ParameterSet for FrameParameters {
    fn outer_width(&self) -> f64 {
        FrameParameters::outer_width(self)
    }

    fn outer_height(&self) -> f64 {
        FrameParameters::outer_height(self)
    }

    fn outer_length(&self) -> f64 {
        FrameParameters::outer_length(self)
    }

    fn inner_height(&self) -> f64 {
        FrameParameters::inner_height(self)
    }

    fn interval(&self) -> f64 {
        FrameParameters::interval(self)
    }

    fn set_outer_width(&mut self, value: f64) -> Result<(), ParameterError> {
        FrameParameters::set_outer_width(self, value)
    }

    fn set_outer_height(&mut self, value: f64) -> Result<(), ParameterError> {
        FrameParameters::set_outer_height(self, value)
    }

    fn set_outer_length(&mut self, value: f64) -> Result<(), ParameterError> {
        FrameParameters::set_outer_length(self, value)
    }

    fn set_inner_height(&mut self, value: f64) -> Result<(), ParameterError> {
        FrameParameters::set_inner_height(self, value)
    }

    fn set_interval(&mut self, value: f64) -> Result<(), ParameterError> {
        FrameParameters::set_interval(self, value)
    }

    fn inner_width(&self) -> Result<f64, ParameterError> {
        FrameParameters::inner_width(self)
    }

    fn inner_length(&self) -> Result<f64, ParameterError> {
        FrameParameters::inner_length(self)
    }

    fn has_substrate(&self) -> bool {
        FrameParameters::has_substrate(self)
    }

    fn has_stand(&self) -> bool {
        FrameParameters::has_stand(self)
    }

    fn rule(&self) -> ConsistencyRule {
        FrameParameters::rule(self)
    }
}
