//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn float_validation_idempotent(n in -1000.0..1000.0f64) {
        let field = float("n").required().positive().min(-10.0).max(10.0);
        let value = json!(n);
        prop_assert_eq!(field.validate(&value), field.validate(&value));
    }

    #[test]
    fn string_validation_idempotent(s in ".*") {
        let field = string("s").required().min_length(2).max_length(8);
        let value = json!(s);
        prop_assert_eq!(field.validate(&value), field.validate(&value));
    }

    #[test]
    fn array_validation_idempotent(xs in prop::collection::vec(-100i64..100, 0..16)) {
        let field = array("xs", integer("x").required().positive()).min_length(1);
        let value = json!(xs);
        prop_assert_eq!(field.validate(&value), field.validate(&value));
    }
}

// ============================================================================
// REQUIRED/ABSENT LAW: null acceptance depends on the flag alone
// ============================================================================

proptest! {
    #[test]
    fn required_decides_null_acceptance(required in any::<bool>(), min in any::<i64>()) {
        let field = if required {
            integer("n").required().min(min)
        } else {
            integer("n").min(min)
        };

        prop_assert_eq!(field.validate(&Value::Null).is_ok(), !required);
    }
}

// ============================================================================
// SCALAR BOUNDS: pass iff the comparison holds
// ============================================================================

proptest! {
    #[test]
    fn min_bound_law(n in any::<i64>(), min in any::<i64>()) {
        let field = integer("n").required().min(min);
        prop_assert_eq!(field.validate(&json!(n)).is_ok(), n >= min);
    }

    #[test]
    fn max_bound_law(n in any::<i64>(), max in any::<i64>()) {
        let field = integer("n").required().max(max);
        prop_assert_eq!(field.validate(&json!(n)).is_ok(), n <= max);
    }
}

// ============================================================================
// RANGE DISJUNCTION: pass iff the value lands in ANY registered range
// ============================================================================

proptest! {
    #[test]
    fn range_disjunction_is_membership(
        n in -500i64..500,
        ranges in prop::collection::vec((-500i64..500, -500i64..500), 1..4),
    ) {
        let mut field = integer("n").required();
        for &(low, high) in &ranges {
            field = field.range(low, high);
        }

        // Misordered pairs stay registered and simply match nothing.
        let in_any = ranges.iter().any(|&(low, high)| n >= low && n <= high);
        prop_assert_eq!(field.validate(&json!(n)).is_ok(), in_any);
    }
}

// ============================================================================
// SHAPE MISMATCH: exactly one error, constraints never evaluated
// ============================================================================

proptest! {
    #[test]
    fn shape_mismatch_yields_exactly_one_error(s in ".*") {
        let field = float("n").required().positive().min(0.0).range(0.0, 1.0);

        let report = field.validate(&json!(s)).unwrap_err();
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(report.first().unwrap().code.as_ref(), "kind_mismatch");
    }
}

// ============================================================================
// AGGREGATION COUNTS: one wrapper per violating element / failing field
// ============================================================================

proptest! {
    #[test]
    fn element_failures_match_violating_elements(
        xs in prop::collection::vec(-100.0..100.0f64, 0..24),
    ) {
        let field = array("xs", float("x").required().positive());
        let expected = xs.iter().filter(|&&x| x <= 0.0).count();

        match field.validate(&json!(xs)) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(report) => {
                prop_assert_eq!(report.len(), expected);
                for error in &report {
                    let index: usize = error.param("index").unwrap().parse().unwrap();
                    prop_assert!(xs[index] <= 0.0);
                }
            }
        }
    }

    #[test]
    fn schema_reports_one_wrapper_per_failing_field(
        age in any::<i64>(),
        score in -100.0..100.0f64,
    ) {
        let schema = Schema::new()
            .field(integer("age").required().min(0))
            .field(float("score").required().positive());

        let expected = usize::from(age < 0) + usize::from(score <= 0.0);

        match schema.validate(&json!({"age": age, "score": score})) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(report) => prop_assert_eq!(report.len(), expected),
        }
    }
}

// ============================================================================
// LENGTH BOUNDS: pass iff the count satisfies both bounds
// ============================================================================

proptest! {
    #[test]
    fn array_length_bounds_law(
        xs in prop::collection::vec(0i64..10, 0..12),
        min in 0usize..8,
        max in 0usize..8,
    ) {
        let field = array("xs", integer("x")).min_length(min).max_length(max);

        let ok = field.validate(&json!(xs)).is_ok();
        prop_assert_eq!(ok, xs.len() >= min && xs.len() <= max);
    }

    #[test]
    fn string_length_bounds_law(s in "[a-z]{0,12}", min in 0usize..8, max in 0usize..8) {
        let field = string("s").min_length(min).max_length(max);

        let ok = field.validate(&json!(s)).is_ok();
        prop_assert_eq!(ok, s.len() >= min && s.len() <= max);
    }
}
