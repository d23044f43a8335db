//! Integration tests for type comparison
//!
//! Tests match rules per strictness mode and mismatch descriptors.

use likeness_engine::{MismatchDescriptor, TypeMatch, compare, type_alike};
use likeness_foundation::{Expr, Settings, StrictnessMode, Value};
use proptest::prelude::*;

fn expr() -> Expr {
    Expr::binary("$", Expr::sym("df"), Expr::sym("count"))
}

fn descriptor(result: TypeMatch) -> MismatchDescriptor {
    match result {
        TypeMatch::Mismatch(d) => d,
        TypeMatch::Match => panic!("expected a mismatch"),
    }
}

fn settings(mode: StrictnessMode) -> Settings {
    Settings::builder().with_strictness(mode).build().unwrap()
}

// =============================================================================
// Matches
// =============================================================================

#[test]
fn fuzzy_whole_doubles_match_integers() {
    let result = compare(
        &Value::integer([1]),
        &Value::numeric([1.0, 2.0, -3.0]),
        &expr(),
        &Settings::default(),
    );
    assert_eq!(result, TypeMatch::Match);
}

#[test]
fn same_raw_tag_always_matches() {
    for mode in [
        StrictnessMode::Fuzzy,
        StrictnessMode::Medium,
        StrictnessMode::Strict,
    ] {
        let result = compare(
            &Value::numeric([1.0]),
            &Value::numeric([1.5, 2.5]),
            &expr(),
            &settings(mode),
        );
        assert!(result.is_match());
    }
}

#[test]
fn functions_collapse_below_strict() {
    let target = Value::Builtin("sum".into());
    let current = Value::Special("quote".into());
    assert!(compare(&target, &current, &expr(), &settings(StrictnessMode::Medium)).is_match());
    assert!(!compare(&target, &current, &expr(), &settings(StrictnessMode::Strict)).is_match());
}

// =============================================================================
// Mismatches
// =============================================================================

#[test]
fn fuzzy_fraction_reports_integer_like() {
    let d = descriptor(compare(
        &Value::integer([1]),
        &Value::numeric([1.0, 2.5]),
        &expr(),
        &Settings::default(),
    ));
    assert!(d.target_description.contains("integer-like"));
    assert_eq!(
        d.to_message(&Settings::default()).unwrap(),
        "`df$count` should be type \"integer-like\" (is \"double\")"
    );
}

#[test]
fn fuzzy_integer_target_against_character_is_integer_like() {
    let d = descriptor(compare(
        &Value::integer([1]),
        &Value::character(["1"]),
        &expr(),
        &Settings::default(),
    ));
    assert_eq!(d.target_description, "type \"integer-like\"");
    assert_eq!(d.actual_description, "\"character\"");

    let d = descriptor(compare(
        &Value::integer([1]),
        &Value::character(["1"]),
        &expr(),
        &Settings::medium(),
    ));
    assert_eq!(d.target_description, "type \"integer\"");
}

#[test]
fn strict_integer_does_not_satisfy_numeric() {
    let d = descriptor(compare(
        &Value::numeric([1.0]),
        &Value::integer([1]),
        &expr(),
        &Settings::strict(),
    ));
    assert_eq!(d.target_description, "type \"double\"");
    assert_eq!(d.actual_description, "\"integer\"");
}

#[test]
fn mismatch_renders_non_syntactic_call_in_braces() {
    let odd = Expr::apply("f", [Expr::sym("my arg")]);
    let d = descriptor(compare(
        &Value::Null,
        &Value::character(["x"]),
        &odd,
        &Settings::default(),
    ));
    assert_eq!(d.rendered_call, "{f(`my arg`)} ");
    assert_eq!(d.target_description, "type \"NULL\"");
}

#[test]
fn mismatch_renders_long_call_on_lines() {
    let long = Expr::apply("f", (1..=12).map(|i| Expr::sym(format!("argument_{i}"))));
    let d = descriptor(compare(
        &Value::integer([1]),
        &Value::character(["x"]),
        &long,
        &Settings::default(),
    ));
    assert!(d.rendered_call.ends_with(")\n"));
    let message = d.to_message(&Settings::default()).unwrap();
    assert!(message.ends_with(")\nshould be type \"integer-like\" (is \"character\")"));
}

#[test]
fn descriptions_are_bounded() {
    let settings = Settings::builder().with_max_string_len(6).build().unwrap();
    let d = descriptor(compare(
        &Value::integer([1]),
        &Value::character(["x"]),
        &Expr::sym("x"),
        &settings,
    ));
    assert_eq!(d.target_description, "type \"");
    assert_eq!(d.actual_description, "\"chara");
}

#[test]
fn type_alike_entry_point() {
    let settings = Settings::default();
    assert!(type_alike(&Value::Null, &Value::Null, &expr(), &settings).is_ok());
    let err = type_alike(&Value::Null, &Value::integer([1]), &expr(), &settings).unwrap_err();
    assert_eq!(err, "`df$count` should be type \"NULL\" (is \"integer\")");
}

// =============================================================================
// Properties
// =============================================================================

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        "[a-z]{1,6}".prop_map(Value::symbol),
        prop::collection::vec(any::<f64>(), 0..8).prop_map(Value::numeric),
        prop::collection::vec(any::<i64>(), 0..8).prop_map(Value::integer),
        prop::collection::vec("[a-z]{0,4}", 0..4).prop_map(Value::character),
        Just(Value::Builtin("sum".into())),
        Just(Value::Environment),
    ]
}

fn any_mode() -> impl Strategy<Value = StrictnessMode> {
    prop_oneof![
        Just(StrictnessMode::Fuzzy),
        Just(StrictnessMode::Medium),
        Just(StrictnessMode::Strict),
    ]
}

proptest! {
    #[test]
    fn every_value_matches_itself(value in any_value(), mode in any_mode()) {
        prop_assert!(compare(&value, &value, &expr(), &settings(mode)).is_match());
    }

    #[test]
    fn strict_matches_only_equal_tags(a in any_value(), b in any_value()) {
        let result = compare(&a, &b, &expr(), &Settings::strict());
        prop_assert_eq!(result.is_match(), a.type_tag() == b.type_tag());
    }

    #[test]
    fn mismatches_always_have_a_message(a in any_value(), b in any_value(), mode in any_mode()) {
        let settings = settings(mode);
        if let TypeMatch::Mismatch(d) = compare(&a, &b, &expr(), &settings) {
            prop_assert!(!d.is_success());
            prop_assert!(d.to_message(&settings).is_some());
            prop_assert!(d.to_structured().is_some());
        }
    }
}
