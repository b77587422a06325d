//! Bounded value - a scalar that never leaves its closed range
//!
//! A [`BoundedValue`] is declared once with `(min, value, max)` and then only
//! accepts assignments inside `[min, max]`. Rejected assignments leave the
//! stored value untouched.

use serde::{Deserialize, Serialize};

use crate::core::error::{ParameterError, RangeSide};

/// A scalar constrained to the closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundedTriple", into = "BoundedTriple")]
pub struct BoundedValue {
    min: f64,
    max: f64,
    value: f64,
}

impl BoundedValue {
    /// Declare a bounded value
    ///
    /// Fails with [`ParameterError::RangeDefinition`] when `min > max` (or a
    /// bound is NaN), and with [`ParameterError::OutOfRange`] when the
    /// initial value lies outside the range.
    pub fn new(min: f64, value: f64, max: f64) -> Result<Self, ParameterError> {
        if !(min <= max) {
            return Err(ParameterError::RangeDefinition { min, max });
        }

        let mut bounded = Self {
            min,
            max,
            value: min,
        };
        bounded.set_value(value)?;
        Ok(bounded)
    }

    /// Current value, always inside `[min, max]`
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound of the range
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies inside `[min, max]`; NaN never does
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Assign a new value
    ///
    /// The stored value changes only on success.
    pub fn set_value(&mut self, value: f64) -> Result<(), ParameterError> {
        if self.contains(value) {
            self.value = value;
            return Ok(());
        }

        let side = if value > self.max {
            RangeSide::Above
        } else {
            RangeSide::Below
        };
        Err(self.out_of_range(value, side))
    }

    fn out_of_range(&self, value: f64, side: RangeSide) -> ParameterError {
        ParameterError::OutOfRange {
            parameter: None,
            value,
            min: self.min,
            max: self.max,
            side,
        }
    }
}

impl std::fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {}]", self.value, self.min, self.max)
    }
}

/// Serialized form: `{ min, value, max }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BoundedTriple {
    min: f64,
    value: f64,
    max: f64,
}

impl TryFrom<BoundedTriple> for BoundedValue {
    type Error = ParameterError;

    fn try_from(triple: BoundedTriple) -> Result<Self, Self::Error> {
        BoundedValue::new(triple.min, triple.value, triple.max)
    }
}

impl From<BoundedValue> for BoundedTriple {
    fn from(bounded: BoundedValue) -> Self {
        Self {
            min: bounded.min,
            value: bounded.value,
            max: bounded.max,
        }
    }
}
