use crate::value::{TextMode, Value, ValueFamily, compare::strict_order_cmp};
use std::cmp::Ordering;

///
/// TextOp
///
/// Substring test selector for text comparisons.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextOp {
    StartsWith,
    EndsWith,
    Contains,
}

/// Coerce a raw parameter literal into the given value family.
///
/// Returns `None` when the literal does not parse; callers treat the
/// resulting comparison as undefined.
#[must_use]
pub fn coerce_to_family(literal: &str, family: ValueFamily) -> Option<Value> {
    match family {
        ValueFamily::Bool => literal.parse::<bool>().ok().map(Value::Bool),
        ValueFamily::Float => literal.parse::<f64>().ok().map(Value::Float),
        ValueFamily::Int => literal.parse::<i64>().ok().map(Value::Int),
        ValueFamily::Null => None,
        ValueFamily::Text => Some(Value::Text(literal.to_string())),
    }
}

/// Equality between a field value and a raw parameter literal.
///
/// `None` when the literal does not coerce into the field's family.
#[must_use]
pub fn compare_eq(actual: &Value, literal: &str) -> Option<bool> {
    compare_order(actual, literal).map(Ordering::is_eq)
}

/// Ordering between a field value and a raw parameter literal.
#[must_use]
pub fn compare_order(actual: &Value, literal: &str) -> Option<Ordering> {
    let coerced = coerce_to_family(literal, actual.family())?;

    strict_order_cmp(actual, &coerced)
}

/// Substring test between a text field value and a parameter literal.
///
/// Case folding applies to both sides under `TextMode::Ci`. `None` when the
/// field value is not text.
#[must_use]
pub fn compare_text(actual: &Value, literal: &str, mode: TextMode, op: TextOp) -> Option<bool> {
    let Value::Text(text) = actual else {
        return None;
    };

    let (haystack, needle) = match mode {
        TextMode::Cs => (text.clone(), literal.to_string()),
        TextMode::Ci => (text.to_lowercase(), literal.to_lowercase()),
    };

    Some(match op {
        TextOp::StartsWith => haystack.starts_with(&needle),
        TextOp::EndsWith => haystack.ends_with(&needle),
        TextOp::Contains => haystack.contains(&needle),
    })
}
