//! Parameter errors - the failure taxonomy of the validation core
//!
//! Three kinds of failure exist:
//! - [`ParameterError::RangeDefinition`]: a bounded value was declared with `min > max`
//! - [`ParameterError::OutOfRange`]: an assignment fell outside `[min, max]`
//! - [`ParameterError::DependencyViolation`]: a derived field broke its consistency law

use miette::Diagnostic;
use thiserror::Error;

use crate::core::frame::{ConsistencyRule, DerivedParameter, ParameterName};

/// Which side of the closed range an assignment missed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    /// Value is greater than the maximum
    Above,
    /// Value is less than the minimum (NaN lands here too)
    Below,
}

impl std::fmt::Display for RangeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSide::Above => write!(f, "greater than the maximum"),
            RangeSide::Below => write!(f, "less than the minimum"),
        }
    }
}

/// Errors raised by bounded values and the frame parameter set
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ParameterError {
    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    #[diagnostic(
        code(pft::range_definition),
        help("declare the range with min <= max")
    )]
    RangeDefinition { min: f64, max: f64 },

    #[error(
        "{}value {value} is {side} {}",
        parameter_prefix(.parameter),
        limit_for(.side, .min, .max)
    )]
    #[diagnostic(
        code(pft::out_of_range),
        help("choose a value inside the allowed range; the previous value was kept")
    )]
    OutOfRange {
        parameter: Option<ParameterName>,
        value: f64,
        min: f64,
        max: f64,
        side: RangeSide,
    },

    #[error(
        "{derived} would be {value} ({outer} - 2 x {interval}); it must be {} and smaller than {}",
        rule_requirement(.rule),
        outer_of(.derived)
    )]
    #[diagnostic(
        code(pft::dependency_violation),
        help("increase the outer dimension or reduce the interval")
    )]
    DependencyViolation {
        derived: DerivedParameter,
        outer: f64,
        interval: f64,
        value: f64,
        rule: ConsistencyRule,
    },
}

impl ParameterError {
    /// Attach the field name to an out-of-range error
    ///
    /// Bounded values don't know which field they back; the frame parameter
    /// set labels the error on the way out. Other variants pass through.
    pub fn with_parameter(self, name: ParameterName) -> Self {
        match self {
            ParameterError::OutOfRange {
                value,
                min,
                max,
                side,
                ..
            } => ParameterError::OutOfRange {
                parameter: Some(name),
                value,
                min,
                max,
                side,
            },
            other => other,
        }
    }

    /// True for failures of a primary field's own range check
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ParameterError::OutOfRange { .. })
    }

    /// True for derived-field consistency failures
    pub fn is_dependency_violation(&self) -> bool {
        matches!(self, ParameterError::DependencyViolation { .. })
    }
}

fn parameter_prefix(parameter: &Option<ParameterName>) -> String {
    match parameter {
        Some(name) => format!("{}: ", name),
        None => String::new(),
    }
}

fn limit_for(side: &RangeSide, min: &f64, max: &f64) -> f64 {
    match side {
        RangeSide::Above => *max,
        RangeSide::Below => *min,
    }
}

fn outer_of(derived: &DerivedParameter) -> ParameterName {
    derived.outer()
}

fn rule_requirement(rule: &ConsistencyRule) -> &'static str {
    rule.requirement()
}
