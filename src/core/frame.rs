//! Frame parameter set - five bounded dimensions and their derived quantities
//!
//! A picture frame is described by its outer width, outer length, outer
//! height, inner height and the wall interval. Inner width and inner length
//! are derived:
//!
//! ```text
//! inner_width  = outer_width  - 2 * interval
//! inner_length = outer_length - 2 * interval
//! ```
//!
//! Each derived value must satisfy the consistency law of the active
//! [`ConsistencyRule`]. The set also remembers whether the latest write
//! attempt on every field succeeded; a failed attempt keeps the frame
//! invalid even though the stored value never changed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::core::bounded::BoundedValue;
use crate::core::error::ParameterError;

/// The five settable frame parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterName {
    OuterWidth,
    OuterLength,
    OuterHeight,
    InnerHeight,
    Interval,
}

impl ParameterName {
    /// All parameters in display order
    pub const ALL: [ParameterName; 5] = [
        ParameterName::OuterWidth,
        ParameterName::OuterLength,
        ParameterName::OuterHeight,
        ParameterName::InnerHeight,
        ParameterName::Interval,
    ];

    /// Order in which a frame document's values are assigned
    pub const ASSIGNMENT_ORDER: [ParameterName; 5] = [
        ParameterName::OuterWidth,
        ParameterName::OuterLength,
        ParameterName::Interval,
        ParameterName::OuterHeight,
        ParameterName::InnerHeight,
    ];

    /// Machine name (snake_case), as used in config and frame files
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterName::OuterWidth => "outer_width",
            ParameterName::OuterLength => "outer_length",
            ParameterName::OuterHeight => "outer_height",
            ParameterName::InnerHeight => "inner_height",
            ParameterName::Interval => "interval",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ParameterName::OuterWidth => "Outer width",
            ParameterName::OuterLength => "Outer length",
            ParameterName::OuterHeight => "Outer height",
            ParameterName::InnerHeight => "Inner height",
            ParameterName::Interval => "Interval",
        }
    }

    /// Derived quantities recomputed when this parameter changes
    pub fn dependents(&self) -> &'static [DerivedParameter] {
        match self {
            ParameterName::OuterWidth => &[DerivedParameter::InnerWidth],
            ParameterName::OuterLength => &[DerivedParameter::InnerLength],
            ParameterName::Interval => &[DerivedParameter::InnerWidth, DerivedParameter::InnerLength],
            ParameterName::OuterHeight | ParameterName::InnerHeight => &[],
        }
    }
}

impl std::fmt::Display for ParameterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParameterName {
    type Err = String;

    /// Accepts `OuterWidth`, `outer_width`, `outer-width` and other casings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "outerwidth" => Ok(ParameterName::OuterWidth),
            "outerlength" => Ok(ParameterName::OuterLength),
            "outerheight" => Ok(ParameterName::OuterHeight),
            "innerheight" => Ok(ParameterName::InnerHeight),
            "interval" => Ok(ParameterName::Interval),
            _ => Err(format!(
                "Invalid parameter: '{}'. Use one of outer_width, outer_length, outer_height, inner_height, interval",
                s
            )),
        }
    }
}

/// The two read-only quantities computed from an outer dimension and the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedParameter {
    InnerWidth,
    InnerLength,
}

impl DerivedParameter {
    pub const ALL: [DerivedParameter; 2] = [DerivedParameter::InnerWidth, DerivedParameter::InnerLength];

    /// The outer dimension this quantity is carved out of
    pub fn outer(&self) -> ParameterName {
        match self {
            DerivedParameter::InnerWidth => ParameterName::OuterWidth,
            DerivedParameter::InnerLength => ParameterName::OuterLength,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DerivedParameter::InnerWidth => "inner_width",
            DerivedParameter::InnerLength => "inner_length",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DerivedParameter::InnerWidth => "Inner width",
            DerivedParameter::InnerLength => "Inner length",
        }
    }
}

impl std::fmt::Display for DerivedParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consistency law applied to derived quantities
///
/// - **Strict**: `derived > 0` and `outer > derived`. A frame whose outer
///   dimension is exactly twice the interval is rejected.
/// - **Inclusive**: `derived >= 0` and `outer >= derived`. The
///   `outer == 2 * interval` boundary is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyRule {
    #[default]
    Strict,
    Inclusive,
}

impl ConsistencyRule {
    /// Check the law for one outer/derived pair
    pub fn holds(&self, outer: f64, derived: f64) -> bool {
        match self {
            ConsistencyRule::Strict => derived > 0.0 && outer > derived,
            ConsistencyRule::Inclusive => derived >= 0.0 && outer >= derived,
        }
    }

    /// What the law demands of a derived quantity, for messages
    pub fn requirement(&self) -> &'static str {
        match self {
            ConsistencyRule::Strict => "positive",
            ConsistencyRule::Inclusive => "non-negative",
        }
    }
}

impl std::fmt::Display for ConsistencyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyRule::Strict => write!(f, "strict"),
            ConsistencyRule::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl std::str::FromStr for ConsistencyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ConsistencyRule::Strict),
            "inclusive" => Ok(ConsistencyRule::Inclusive),
            _ => Err(format!(
                "Invalid consistency rule: '{}'. Use 'strict' or 'inclusive'",
                s
            )),
        }
    }
}

/// Outcome of the latest write attempt on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// Never written since construction
    #[default]
    Untouched,
    /// Latest attempt succeeded
    Accepted,
    /// Latest attempt failed (range or dependency)
    Rejected,
}

impl FieldStatus {
    /// Untouched fields count as successful
    pub fn is_ok(&self) -> bool {
        !matches!(self, FieldStatus::Rejected)
    }
}

impl std::fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldStatus::Untouched => write!(f, "untouched"),
            FieldStatus::Accepted => write!(f, "accepted"),
            FieldStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Parameters of one picture frame
///
/// Owns the five bounded dimensions, the accessory flags and the per-field
/// status map. Not meant for concurrent mutation: share it across threads
/// only behind external synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParameters {
    outer_width: BoundedValue,
    outer_height: BoundedValue,
    outer_length: BoundedValue,
    inner_height: BoundedValue,
    interval: BoundedValue,
    has_substrate: bool,
    has_stand: bool,
    rule: ConsistencyRule,
    status: HashMap<ParameterName, FieldStatus>,
}

impl FrameParameters {
    /// Assemble a parameter set from five already-declared bounded values
    ///
    /// The values are taken as they are; their ranges were checked when they
    /// were declared. The derived quantities are not checked here, so a set
    /// built from inconsistent values simply starts out invalid.
    pub fn new(
        outer_width: BoundedValue,
        outer_height: BoundedValue,
        outer_length: BoundedValue,
        inner_height: BoundedValue,
        interval: BoundedValue,
    ) -> Self {
        Self {
            outer_width,
            outer_height,
            outer_length,
            inner_height,
            interval,
            has_substrate: false,
            has_stand: false,
            rule: ConsistencyRule::default(),
            status: HashMap::new(),
        }
    }

    /// Select the consistency law for derived quantities
    pub fn with_rule(mut self, rule: ConsistencyRule) -> Self {
        self.rule = rule;
        self
    }

    /// Active consistency law
    pub fn rule(&self) -> ConsistencyRule {
        self.rule
    }

    // =========================================================================
    // Primary fields
    // =========================================================================

    pub fn outer_width(&self) -> f64 {
        self.outer_width.value()
    }

    pub fn outer_height(&self) -> f64 {
        self.outer_height.value()
    }

    pub fn outer_length(&self) -> f64 {
        self.outer_length.value()
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height.value()
    }

    pub fn interval(&self) -> f64 {
        self.interval.value()
    }

    pub fn set_outer_width(&mut self, value: f64) -> Result<(), ParameterError> {
        self.set(ParameterName::OuterWidth, value)
    }

    pub fn set_outer_height(&mut self, value: f64) -> Result<(), ParameterError> {
        self.set(ParameterName::OuterHeight, value)
    }

    pub fn set_outer_length(&mut self, value: f64) -> Result<(), ParameterError> {
        self.set(ParameterName::OuterLength, value)
    }

    pub fn set_inner_height(&mut self, value: f64) -> Result<(), ParameterError> {
        self.set(ParameterName::InnerHeight, value)
    }

    pub fn set_interval(&mut self, value: f64) -> Result<(), ParameterError> {
        self.set(ParameterName::Interval, value)
    }

    /// Current value of a primary field
    pub fn get(&self, name: ParameterName) -> f64 {
        self.bounds(name).value()
    }

    /// The bounded value backing a primary field
    pub fn bounds(&self, name: ParameterName) -> &BoundedValue {
        match name {
            ParameterName::OuterWidth => &self.outer_width,
            ParameterName::OuterLength => &self.outer_length,
            ParameterName::OuterHeight => &self.outer_height,
            ParameterName::InnerHeight => &self.inner_height,
            ParameterName::Interval => &self.interval,
        }
    }

    fn bounds_mut(&mut self, name: ParameterName) -> &mut BoundedValue {
        match name {
            ParameterName::OuterWidth => &mut self.outer_width,
            ParameterName::OuterLength => &mut self.outer_length,
            ParameterName::OuterHeight => &mut self.outer_height,
            ParameterName::InnerHeight => &mut self.inner_height,
            ParameterName::Interval => &mut self.interval,
        }
    }

    /// Assign a primary field
    ///
    /// The outcome is recorded in the status map. For outer width, outer
    /// length and interval the affected derived quantities are recomputed
    /// right away; a consistency failure is returned and marks the field
    /// rejected even though the new value was stored.
    pub fn set(&mut self, name: ParameterName, value: f64) -> Result<(), ParameterError> {
        let result = self
            .bounds_mut(name)
            .set_value(value)
            .map_err(|e| e.with_parameter(name))
            .and_then(|()| self.check_dependents(name));

        match &result {
            Ok(()) => {
                debug!(parameter = %name, value, outcome = "accepted", "parameter assigned");
                self.status.insert(name, FieldStatus::Accepted);
            }
            Err(e) => {
                debug!(parameter = %name, value, outcome = "rejected", error = %e, "parameter assigned");
                self.status.insert(name, FieldStatus::Rejected);
            }
        }

        result
    }

    fn check_dependents(&self, name: ParameterName) -> Result<(), ParameterError> {
        for derived in name.dependents() {
            self.derived(*derived)?;
        }
        Ok(())
    }

    // =========================================================================
    // Derived fields
    // =========================================================================

    /// `outer_width - 2 * interval`, checked against the consistency law
    pub fn inner_width(&self) -> Result<f64, ParameterError> {
        self.derived(DerivedParameter::InnerWidth)
    }

    /// `outer_length - 2 * interval`, checked against the consistency law
    pub fn inner_length(&self) -> Result<f64, ParameterError> {
        self.derived(DerivedParameter::InnerLength)
    }

    /// Compute a derived quantity; reading never touches the status map
    pub fn derived(&self, derived: DerivedParameter) -> Result<f64, ParameterError> {
        let outer = self.get(derived.outer());
        let interval = self.interval.value();
        let value = outer - 2.0 * interval;

        if self.rule.holds(outer, value) {
            Ok(value)
        } else {
            Err(ParameterError::DependencyViolation {
                derived,
                outer,
                interval,
                value,
                rule: self.rule,
            })
        }
    }

    // =========================================================================
    // Accessories
    // =========================================================================

    /// Whether the frame gets a backing substrate
    pub fn has_substrate(&self) -> bool {
        self.has_substrate
    }

    pub fn set_has_substrate(&mut self, has_substrate: bool) {
        self.has_substrate = has_substrate;
    }

    /// Whether the frame gets a desk stand
    pub fn has_stand(&self) -> bool {
        self.has_stand
    }

    pub fn set_has_stand(&mut self, has_stand: bool) {
        self.has_stand = has_stand;
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Probe an assignment by name
    ///
    /// Runs the normal setter, so the probe is recorded in the status map
    /// exactly like a real assignment. Returns the failure message, or `None`
    /// on success. Unknown names are ignored and return `None`.
    pub fn validate_parameter(&mut self, name: &str, value: f64) -> Option<String> {
        let Ok(parameter) = name.parse::<ParameterName>() else {
            debug!(name, "ignoring probe of unknown parameter");
            return None;
        };

        self.set(parameter, value).err().map(|e| e.to_string())
    }

    /// Outcome of the latest write attempt on a field
    pub fn status(&self, name: ParameterName) -> FieldStatus {
        self.status.get(&name).copied().unwrap_or_default()
    }

    /// Fields whose latest write attempt failed, in display order
    pub fn rejected_fields(&self) -> Vec<ParameterName> {
        ParameterName::ALL
            .into_iter()
            .filter(|name| !self.status(*name).is_ok())
            .collect()
    }

    /// True when both derived quantities satisfy the consistency law and no
    /// field's latest write attempt failed
    pub fn is_valid(&self) -> bool {
        self.inner_width().is_ok()
            && self.inner_length().is_ok()
            && self.status.values().all(FieldStatus::is_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_HEIGHT: f64 = 1.0;
    const MIN_FOR_LENGTH_AND_WIDTH: f64 = 10.0;
    const MAX: f64 = 100.0;
    const MAX_INTERVAL: f64 = 6.0;
    const VALUE: f64 = 5.0;

    fn frame() -> FrameParameters {
        FrameParameters::new(
            BoundedValue::new(MIN_FOR_LENGTH_AND_WIDTH, MAX, MAX).unwrap(),
            BoundedValue::new(MIN_HEIGHT, VALUE, MIN_FOR_LENGTH_AND_WIDTH).unwrap(),
            BoundedValue::new(MIN_FOR_LENGTH_AND_WIDTH, MAX, MAX).unwrap(),
            BoundedValue::new(MIN_HEIGHT, VALUE, MIN_FOR_LENGTH_AND_WIDTH).unwrap(),
            BoundedValue::new(MIN_HEIGHT, VALUE, MAX_INTERVAL).unwrap(),
        )
    }

    #[test]
    fn test_new_exposes_values_and_derived() {
        let f = frame();
        assert_eq!(f.outer_width(), MAX);
        assert_eq!(f.outer_height(), VALUE);
        assert_eq!(f.outer_length(), MAX);
        assert_eq!(f.inner_height(), VALUE);
        assert_eq!(f.interval(), VALUE);
        assert_eq!(f.inner_width().unwrap(), 90.0);
        assert_eq!(f.inner_length().unwrap(), 90.0);
        assert!(f.is_valid());
        assert!(f.rejected_fields().is_empty());
    }

    #[test]
    fn test_constructor_argument_order() {
        // width, height, length, inner height, interval
        let f = FrameParameters::new(
            BoundedValue::new(0.0, 1.0, 10.0).unwrap(),
            BoundedValue::new(0.0, 2.0, 10.0).unwrap(),
            BoundedValue::new(0.0, 3.0, 10.0).unwrap(),
            BoundedValue::new(0.0, 4.0, 10.0).unwrap(),
            BoundedValue::new(0.0, 0.5, 10.0).unwrap(),
        );
        assert_eq!(f.outer_width(), 1.0);
        assert_eq!(f.outer_height(), 2.0);
        assert_eq!(f.outer_length(), 3.0);
        assert_eq!(f.inner_height(), 4.0);
        assert_eq!(f.interval(), 0.5);
    }

    #[test]
    fn test_inner_length_positive_cases() {
        let cases = [
            (MAX, (MIN_HEIGHT + MAX_INTERVAL) / 2.0),
            (MAX, MIN_HEIGHT),
            (MAX, MAX_INTERVAL),
            (MIN_FOR_LENGTH_AND_WIDTH, MIN_HEIGHT),
            (MIN_FOR_LENGTH_AND_WIDTH, (MIN_HEIGHT + MAX_INTERVAL) / 2.0),
            (
                (MIN_FOR_LENGTH_AND_WIDTH + MAX) / 2.0,
                (MIN_HEIGHT + MAX_INTERVAL) / 2.0,
            ),
        ];

        for (outer, interval) in cases {
            let mut f = frame();
            f.set_interval(interval).unwrap();
            f.set_outer_length(outer).unwrap();

            let inner = f.inner_length().unwrap();
            assert_eq!(inner, outer - 2.0 * interval);
            assert!(inner > 0.0);
            assert!(f.outer_length() > inner);
        }
    }

    #[test]
    fn test_inner_width_positive_cases() {
        for (outer, interval) in [(MAX, MAX_INTERVAL), (MIN_FOR_LENGTH_AND_WIDTH, MIN_HEIGHT)] {
            let mut f = frame();
            f.set_interval(interval).unwrap();
            f.set_outer_width(outer).unwrap();
            assert_eq!(f.inner_width().unwrap(), outer - 2.0 * interval);
        }
    }

    #[test]
    fn test_shrinking_outer_length_violates_dependency() {
        let mut f = frame();
        f.set_interval(MAX_INTERVAL).unwrap();

        let err = f.set_outer_length(MIN_FOR_LENGTH_AND_WIDTH).unwrap_err();
        assert!(err.is_dependency_violation());
        // the write itself went through
        assert_eq!(f.outer_length(), MIN_FOR_LENGTH_AND_WIDTH);

        let read = f.inner_length().unwrap_err();
        assert_eq!(
            read,
            ParameterError::DependencyViolation {
                derived: DerivedParameter::InnerLength,
                outer: 10.0,
                interval: 6.0,
                value: -2.0,
                rule: ConsistencyRule::Strict,
            }
        );
        assert_eq!(f.status(ParameterName::OuterLength), FieldStatus::Rejected);
        assert!(!f.is_valid());
    }

    #[test]
    fn test_growing_interval_violates_both_dependents() {
        let mut f = frame();
        f.set_interval(MIN_HEIGHT).unwrap();
        f.set_outer_width(MIN_FOR_LENGTH_AND_WIDTH).unwrap();
        f.set_outer_length(MIN_FOR_LENGTH_AND_WIDTH).unwrap();

        let err = f.set_interval(MAX_INTERVAL).unwrap_err();
        assert!(err.is_dependency_violation());
        assert!(f.inner_width().is_err());
        assert!(f.inner_length().is_err());
        assert_eq!(f.status(ParameterName::Interval), FieldStatus::Rejected);
        assert_eq!(f.rejected_fields(), vec![ParameterName::Interval]);
    }

    #[test]
    fn test_exactly_twice_interval_is_rejected_by_strict_rule() {
        let mut f = frame();
        f.set_interval(5.0).unwrap();
        assert!(f.set_outer_width(10.0).is_err());
        assert!(f.inner_width().is_err());
    }

    #[test]
    fn test_inclusive_rule_accepts_zero_inner() {
        let mut f = frame().with_rule(ConsistencyRule::Inclusive);
        f.set_interval(5.0).unwrap();
        f.set_outer_width(10.0).unwrap();
        assert_eq!(f.inner_width().unwrap(), 0.0);
        assert!(f.is_valid());

        f.set_interval(6.0).unwrap_err();
        assert!(f.inner_width().is_err());
        assert!(!f.is_valid());
    }

    #[test]
    fn test_out_of_range_keeps_value_and_poisons_validity() {
        let mut f = frame();
        let err = f.set_outer_height(1000.0).unwrap_err();

        assert!(err.is_out_of_range());
        assert!(err.to_string().starts_with("outer_height: "));
        assert_eq!(f.outer_height(), VALUE);
        assert!(!f.is_valid());
    }

    #[test]
    fn test_successful_rewrite_clears_field_failure() {
        let mut f = frame();
        f.set_inner_height(-5.0).unwrap_err();
        assert!(!f.is_valid());

        f.set_inner_height(3.0).unwrap();
        assert_eq!(f.status(ParameterName::InnerHeight), FieldStatus::Accepted);
        assert!(f.is_valid());
    }

    #[test]
    fn test_stale_failure_survives_fixing_other_field() {
        let mut f = frame();
        f.set_interval(MIN_HEIGHT).unwrap();
        f.set_outer_width(MIN_FOR_LENGTH_AND_WIDTH).unwrap();
        f.set_interval(MAX_INTERVAL).unwrap_err();

        // the dependency is satisfied again, but the interval's last attempt failed
        f.set_outer_width(MAX).unwrap();
        assert!(f.inner_width().is_ok());
        assert!(f.inner_length().is_ok());
        assert!(!f.is_valid());

        f.set_interval(MAX_INTERVAL).unwrap();
        assert!(f.is_valid());
    }

    #[test]
    fn test_validate_parameter_returns_message_and_records() {
        let mut f = frame();
        let msg = f.validate_parameter("Interval", 1000.0).unwrap();

        assert!(msg.contains("greater than the maximum 6"));
        assert_eq!(f.interval(), VALUE);
        assert!(!f.is_valid());
    }

    #[test]
    fn test_validate_parameter_success_is_empty() {
        let mut f = frame();
        assert_eq!(f.validate_parameter("outer_width", 50.0), None);
        assert_eq!(f.outer_width(), 50.0);
        assert_eq!(f.status(ParameterName::OuterWidth), FieldStatus::Accepted);
    }

    #[test]
    fn test_validate_parameter_unknown_name_is_noop() {
        let mut f = frame();
        assert_eq!(f.validate_parameter("Depth", -1.0), None);
        assert!(f.is_valid());
        assert_eq!(f, frame());
    }

    #[test]
    fn test_derived_read_has_no_status_side_effect() {
        let f = FrameParameters::new(
            BoundedValue::new(10.0, 10.0, 100.0).unwrap(),
            BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
            BoundedValue::new(10.0, 100.0, 100.0).unwrap(),
            BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
            BoundedValue::new(1.0, 6.0, 6.0).unwrap(),
        );

        assert!(f.inner_width().is_err());
        assert!(f.rejected_fields().is_empty());
        assert!(!f.is_valid());
    }

    #[test]
    fn test_accessory_flags() {
        for (substrate, stand) in [(true, true), (true, false), (false, true), (false, false)] {
            let mut f = frame();
            f.set_has_substrate(substrate);
            f.set_has_stand(stand);
            assert_eq!(f.has_substrate(), substrate);
            assert_eq!(f.has_stand(), stand);
        }
    }

    #[test]
    fn test_parameter_name_parsing() {
        assert_eq!("OuterWidth".parse(), Ok(ParameterName::OuterWidth));
        assert_eq!("outer_length".parse(), Ok(ParameterName::OuterLength));
        assert_eq!("outer-height".parse(), Ok(ParameterName::OuterHeight));
        assert_eq!("INNER_HEIGHT".parse(), Ok(ParameterName::InnerHeight));
        assert_eq!("Interval".parse(), Ok(ParameterName::Interval));
        assert!("InnerWidth".parse::<ParameterName>().is_err());
    }

    #[test]
    fn test_consistency_rule_parsing() {
        assert_eq!("strict".parse(), Ok(ConsistencyRule::Strict));
        assert_eq!("Inclusive".parse(), Ok(ConsistencyRule::Inclusive));
        assert!("loose".parse::<ConsistencyRule>().is_err());
    }
}
