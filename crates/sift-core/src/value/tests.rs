use crate::value::{TextMode, TextOp, Value, canonical_cmp, compare_eq, compare_order, compare_text};
use std::cmp::Ordering;

#[test]
fn int_literal_compares_numerically_not_lexically() {
    // "5" > "10" lexically; coercion must prevent that.
    assert_eq!(compare_order(&Value::Int(5), "10"), Some(Ordering::Less));
    assert_eq!(compare_order(&Value::Int(10), "10"), Some(Ordering::Equal));
}

#[test]
fn unparseable_literal_is_undefined() {
    assert_eq!(compare_order(&Value::Int(5), "ten"), None);
    assert_eq!(compare_eq(&Value::Bool(true), "yes"), None);
}

#[test]
fn null_field_never_defines_a_comparison() {
    assert_eq!(compare_eq(&Value::Null, "anything"), None);
    assert_eq!(compare_order(&Value::Null, "1"), None);
}

#[test]
fn float_field_accepts_integral_literal() {
    assert_eq!(compare_eq(&Value::Float(2.0), "2"), Some(true));
    assert_eq!(compare_order(&Value::Float(2.5), "3"), Some(Ordering::Less));
}

#[test]
fn text_compare_folds_case_only_when_asked() {
    let name = Value::Text("Alice".to_string());

    assert_eq!(
        compare_text(&name, "ALI", TextMode::Ci, TextOp::StartsWith),
        Some(true)
    );
    assert_eq!(
        compare_text(&name, "ALI", TextMode::Cs, TextOp::StartsWith),
        Some(false)
    );
    assert_eq!(
        compare_text(&name, "ce", TextMode::Cs, TextOp::EndsWith),
        Some(true)
    );
}

#[test]
fn text_compare_on_non_text_is_undefined() {
    assert_eq!(
        compare_text(&Value::Int(3), "3", TextMode::Ci, TextOp::Contains),
        None
    );
}

#[test]
fn canonical_cmp_orders_null_first_and_mixes_numerics() {
    assert_eq!(
        canonical_cmp(&Value::Null, &Value::Int(i64::MIN)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Int(2), &Value::Float(2.5)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Int(3), &Value::Text("0".to_string())),
        Ordering::Less
    );
}

#[test]
fn from_impls_pick_the_matching_variant() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7_i64), Value::Int(7));
    assert_eq!(Value::from(1.5_f64), Value::Float(1.5));
    assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    assert_eq!(Value::from("x".to_string()), Value::Text("x".to_string()));
}

#[test]
fn canonical_cmp_is_total_over_same_family() {
    assert_eq!(
        canonical_cmp(&Value::Text("a".to_string()), &Value::Text("b".to_string())),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Bool(false), &Value::Bool(true)),
        Ordering::Less
    );
}
