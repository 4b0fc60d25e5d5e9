//! Property-based tests for chain laws.
//!
//! ## Step Laws
//! - **Application**: `Chain(v).add(f).get() == f(v)`
//! - **Composition**: `Chain(v).add(f).add(g).get() == g(f(v))`
//! - **Skip**: `Chain(v).add(missing).get() == v`
//! - **Apply Purity**: `Chain(v).apply(f).get() == v`
//!
//! ## String Laws
//! - **Append**: `Chain(s).append_string(t).get() == s + t`
//! - **Prepend**: `Chain(s).prepend_string(t).get() == t + s`
//!
//! Using proptest, we generate random values to check these laws across a
//! wide range of inputs.

use chaining::arguments;
use chaining::chain::Chain;
use chaining::function::{Arguments, CallError, Current, FunctionRegistry, single};
use chaining::value::{Kind, Value};
use proptest::prelude::*;

fn double(value: Value) -> Result<Value, CallError> {
    match value {
        Value::Integer(number) => Ok(Value::Integer(number.wrapping_mul(2))),
        other => Ok(Value::Sequence(vec![other.clone(), other])),
    }
}

fn describe(value: Value) -> Result<Value, CallError> {
    Ok(Value::from(format!("{}:{value}", value.kind())))
}

fn registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry
        .register_unary("double", double)
        .register_unary("describe", describe)
        .register("pair", |arguments: Arguments| Ok(Value::Sequence(arguments.into_vec())));
    registry
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[a-z ]{0,12}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Sequence)
    })
}

// =============================================================================
// Step Laws
// =============================================================================

proptest! {
    /// Application Law: add(f) stores f(v)
    #[test]
    fn prop_add_applies_function(start in value()) {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain.add("double").unwrap();

        prop_assert_eq!(chain.get(), Some(&double(start).unwrap()));
    }

    /// Composition Law: add(f).add(g) stores g(f(v))
    #[test]
    fn prop_add_composes_in_order(start in value()) {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain.add("double").unwrap().add("describe").unwrap();

        let expected = describe(double(start).unwrap()).unwrap();
        prop_assert_eq!(chain.get(), Some(&expected));
    }

    /// Skip Law: an unresolved name leaves the value unchanged
    #[test]
    fn prop_missing_function_keeps_value(start in value(), name in "[a-z_]{1,10}") {
        let registry = registry();
        prop_assume!(!["double", "describe", "pair"].contains(&name.as_str()));

        let mut chain = Chain::with_value(&registry, start.clone());
        chain.add(name.as_str()).unwrap();

        prop_assert_eq!(chain.get(), Some(&start));
        prop_assert_eq!(chain.skipped().len(), 1);
        prop_assert_eq!(chain.skipped()[0].name(), name.as_str());
    }

    /// Apply Purity Law: apply never changes the value
    #[test]
    fn prop_apply_keeps_value(start in value()) {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain
            .apply("double")
            .unwrap()
            .apply_with("pair", arguments![Current, 1])
            .unwrap();

        prop_assert_eq!(chain.get(), Some(&start));
    }

    /// Current markers resolve to the value before the step
    #[test]
    fn prop_current_marker_is_pre_step_value(start in value(), extra in any::<i64>()) {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain.add_with("pair", arguments![Current, extra, Current]).unwrap();

        let expected = Value::Sequence(vec![start.clone(), Value::Integer(extra), start]);
        prop_assert_eq!(chain.get(), Some(&expected));
    }

    /// kind reports the category of whatever the last step produced
    #[test]
    fn prop_kind_tracks_value(start in value()) {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start);
        chain.add("describe").unwrap();
        prop_assert_eq!(chain.kind(), Kind::String);

        chain.add_with("pair", arguments![Current]).unwrap();
        prop_assert_eq!(chain.kind(), Kind::Sequence);
    }
}

// =============================================================================
// String Laws
// =============================================================================

proptest! {
    /// Append Law: append_string(t) yields s + t
    #[test]
    fn prop_append_concatenates(start in ".{0,16}", suffix in ".{0,16}") {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain.append_string(&suffix).unwrap();

        prop_assert_eq!(chain.get(), Some(&Value::from(format!("{start}{suffix}"))));
    }

    /// Prepend Law: prepend_string(t) yields t + s
    #[test]
    fn prop_prepend_concatenates(start in ".{0,16}", prefix in ".{0,16}") {
        let registry = registry();
        let mut chain = Chain::with_value(&registry, start.clone());
        chain.prepend_string(&prefix).unwrap();

        prop_assert_eq!(chain.get(), Some(&Value::from(format!("{prefix}{start}"))));
    }

    /// Implicit application is the same as an explicit single-argument list
    #[test]
    fn prop_implicit_equals_explicit_current(start in value()) {
        let registry = registry();
        let mut implicit = Chain::with_value(&registry, start.clone());
        implicit.add("describe").unwrap();

        let mut explicit = Chain::with_value(&registry, start);
        explicit.add_with("describe", arguments![Current]).unwrap();

        prop_assert_eq!(implicit.get(), explicit.get());
    }
}

#[test]
fn single_helper_rejects_extra_arguments() {
    let arguments: Arguments = vec![Value::Null, Value::Null].into();
    assert_eq!(
        single(arguments),
        Err(CallError::Arity {
            expected: 1,
            actual: 2
        })
    );
}
