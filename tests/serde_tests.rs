#![cfg(feature = "serde")]

//! Integration tests for serde support in chaining.
//!
//! Values map onto plain JSON without variant tags, so chains can start from
//! and end in documents produced elsewhere.

use std::collections::BTreeMap;

use chaining::chain::{Chain, ChainOptions, MissingFunctionPolicy};
use chaining::function::FunctionRegistry;
use chaining::value::{Kind, Value};
use rstest::rstest;

// =============================================================================
// Value
// =============================================================================

#[rstest]
fn test_value_from_json_document() {
    let json = r#"{"name": "september", "tags": ["a", "b"], "age": 30, "admin": false, "note": null}"#;
    let value: Value = serde_json::from_str(json).unwrap();

    let expected = Value::Mapping(BTreeMap::from([
        ("admin".to_owned(), Value::Bool(false)),
        ("age".to_owned(), Value::Integer(30)),
        ("name".to_owned(), Value::from("september")),
        ("note".to_owned(), Value::Null),
        ("tags".to_owned(), Value::from(vec!["a", "b"])),
    ]));
    assert_eq!(value, expected);
}

#[rstest]
#[case("1.5", Value::Float(1.5))]
#[case("-4", Value::Integer(-4))]
#[case("\"text\"", Value::from("text"))]
#[case("[]", Value::Sequence(vec![]))]
fn test_value_scalars_from_json(#[case] json: &str, #[case] expected: Value) {
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value, expected);
}

#[rstest]
fn test_value_integer_beyond_i64_becomes_float() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value.kind(), Kind::Float);
    assert_eq!(value, Value::Float(18_446_744_073_709_551_615_u64 as f64));

    let largest: Value = serde_json::from_str("9223372036854775807").unwrap();
    assert_eq!(largest, Value::Integer(i64::MAX));
}

#[rstest]
fn test_value_serializes_without_tags() {
    let value = Value::from(BTreeMap::from([("list", vec![1, 2])]));
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"list":[1,2]}"#);
}

#[cfg(feature = "stdlib")]
#[rstest]
fn test_chain_result_serializes_to_json() {
    let registry = FunctionRegistry::with_standard_library();
    let input: Value = serde_json::from_str(r#""a|b|c""#).unwrap();

    let mut chain = Chain::with_value(&registry, input);
    chain
        .add_with("split", chaining::arguments!["|", chaining::function::Current])
        .unwrap();

    let json = serde_json::to_string(&chain.into_value()).unwrap();
    assert_eq!(json, r#"["a","b","c"]"#);
}

// =============================================================================
// Kind
// =============================================================================

#[rstest]
#[case(Kind::Sequence, "\"sequence\"")]
#[case(Kind::Unset, "\"unset\"")]
#[case(Kind::Boolean, "\"boolean\"")]
fn test_kind_serializes_lowercase(#[case] kind: Kind, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
}

// =============================================================================
// ChainOptions
// =============================================================================

#[rstest]
fn test_options_from_json() {
    let options: ChainOptions = serde_json::from_str(r#"{"missing_function": "fail"}"#).unwrap();
    assert_eq!(options.missing_function, MissingFunctionPolicy::Fail);
}

#[rstest]
fn test_options_default_when_fields_missing() {
    let options: ChainOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ChainOptions::default());
    assert_eq!(options.missing_function, MissingFunctionPolicy::Skip);
}

#[rstest]
fn test_options_reject_unknown_policy() {
    let result = serde_json::from_str::<ChainOptions>(r#"{"missing_function": "panic"}"#);
    assert!(result.is_err());
}

#[cfg(not(feature = "stdlib"))]
#[rstest]
fn test_empty_registry_chain_serializes_null() {
    let registry = FunctionRegistry::new();
    let chain = Chain::new(&registry);
    assert_eq!(serde_json::to_string(&chain.into_value()).unwrap(), "null");
}
