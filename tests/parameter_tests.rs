//! Parameter validation properties and reference scenarios

use pft::core::{
    BoundedValue, BuildError, ConsistencyRule, FieldStatus, FrameBuilder, FrameParameters,
    ParameterError, ParameterName, SheetBuilder, SheetFormat,
};
use proptest::prelude::*;

/// The reference frame: every value at its usual default
fn reference_frame() -> FrameParameters {
    FrameParameters::new(
        BoundedValue::new(10.0, 100.0, 100.0).unwrap(),
        BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
        BoundedValue::new(10.0, 100.0, 100.0).unwrap(),
        BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
        BoundedValue::new(1.0, 5.0, 6.0).unwrap(),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_symmetric_range_rejects_value_above_max() {
    let mut v = BoundedValue::new(-10.0, 0.0, 10.0).unwrap();
    assert_eq!(v.min(), -10.0);
    assert_eq!(v.value(), 0.0);
    assert_eq!(v.max(), 10.0);

    assert!(v.set_value(20.0).is_err());
    assert_eq!(v.value(), 0.0);
}

#[test]
fn test_reference_frame_is_valid() {
    let f = reference_frame();
    assert_eq!(f.inner_width().unwrap(), 90.0);
    assert_eq!(f.inner_length().unwrap(), 90.0);
    assert!(f.is_valid());
}

#[test]
fn test_widest_interval_with_shortest_length_is_invalid() {
    let mut f = reference_frame();
    f.set_interval(6.0).unwrap();
    let _ = f.set_outer_length(10.0);

    assert!(matches!(
        f.inner_length(),
        Err(ParameterError::DependencyViolation { value, .. }) if value == -2.0
    ));
    assert!(!f.is_valid());
}

#[test]
fn test_probing_huge_interval_reports_and_poisons() {
    let mut f = reference_frame();
    let message = f.validate_parameter("Interval", 1000.0);

    assert!(message.is_some_and(|m| !m.is_empty()));
    assert!(!f.is_valid());
    assert_eq!(f.interval(), 5.0);
    assert_eq!(f.status(ParameterName::Interval), FieldStatus::Rejected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_set_value_succeeds_iff_in_range(
        lo in -1000.0f64..1000.0,
        span in 0.0f64..1000.0,
        v in -3000.0f64..3000.0,
    ) {
        let hi = lo + span;
        let mut b = BoundedValue::new(lo, lo, hi).unwrap();
        let result = b.set_value(v);

        if lo <= v && v <= hi {
            prop_assert!(result.is_ok());
            prop_assert_eq!(b.value(), v);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(b.value(), lo);
        }
    }

    #[test]
    fn prop_inverted_range_never_constructs(
        max in -1000.0f64..1000.0,
        gap in 0.001f64..1000.0,
        value in -3000.0f64..3000.0,
    ) {
        let min = max + gap;
        let is_range_error = matches!(
            BoundedValue::new(min, value, max),
            Err(ParameterError::RangeDefinition { .. })
        );
        prop_assert!(is_range_error);
    }

    #[test]
    fn prop_derived_readable_iff_strict_law_holds(
        outer in 10.0f64..=100.0,
        interval in 1.0f64..=6.0,
    ) {
        let f = FrameParameters::new(
            BoundedValue::new(10.0, outer, 100.0).unwrap(),
            BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
            BoundedValue::new(10.0, outer, 100.0).unwrap(),
            BoundedValue::new(1.0, 5.0, 10.0).unwrap(),
            BoundedValue::new(1.0, interval, 6.0).unwrap(),
        );
        let inner = outer - 2.0 * interval;
        let law = inner > 0.0 && outer > inner;

        prop_assert_eq!(f.inner_width().is_ok(), law);
        prop_assert_eq!(f.inner_length().is_ok(), law);
        if law {
            prop_assert_eq!(f.inner_width().unwrap(), inner);
        }
    }

    #[test]
    fn prop_is_valid_is_conjunction_of_statuses_and_derived(
        writes in prop::collection::vec((0usize..5, -20.0f64..120.0), 0..12),
    ) {
        let mut f = reference_frame();
        for (index, value) in writes {
            let _ = f.set(ParameterName::ALL[index], value);
        }

        let statuses_ok = ParameterName::ALL.iter().all(|n| f.status(*n).is_ok());
        let derived_ok = f.inner_width().is_ok() && f.inner_length().is_ok();
        prop_assert_eq!(f.is_valid(), statuses_ok && derived_ok);
    }

    #[test]
    fn prop_bad_probe_keeps_value_and_invalidates(bad in prop_oneof![-1000.0f64..9.99, 100.01f64..1000.0]) {
        let mut f = reference_frame();
        let message = f.validate_parameter("OuterWidth", bad);

        prop_assert!(message.is_some());
        prop_assert_eq!(f.outer_width(), 100.0);
        prop_assert!(!f.is_valid());
    }

    #[test]
    fn prop_builder_refuses_invalid_frames(
        writes in prop::collection::vec((0usize..5, -20.0f64..120.0), 1..8),
    ) {
        let mut f = reference_frame();
        for (index, value) in writes {
            let _ = f.set(ParameterName::ALL[index], value);
        }

        let mut builder = SheetBuilder::new(Vec::new(), SheetFormat::Yaml);
        let result = builder.build(&f);
        if f.is_valid() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(BuildError::Rejected)));
            prop_assert!(builder.into_inner().is_empty());
        }
    }
}

#[test]
fn test_inclusive_rule_reads_zero_inner_but_not_negative() {
    let mut f = reference_frame().with_rule(ConsistencyRule::Inclusive);
    f.set_interval(5.0).unwrap();
    f.set_outer_width(10.0).unwrap();
    assert_eq!(f.inner_width().unwrap(), 0.0);

    let err = f.set_interval(5.5).unwrap_err();
    assert!(err.is_dependency_violation());
    assert!(f.inner_width().is_err());

    let strict = reference_frame();
    assert!(!ConsistencyRule::Strict.holds(10.0, 0.0));
    assert!(strict.inner_width().is_ok());
}
