use crate::value::Value;
use std::cmp::Ordering;

/// Strict comparator for orderable value pairs.
///
/// Defined for same-family pairs and for the Int/Float numeric widening
/// pair; every other combination is undefined and returns `None`. Callers
/// must treat undefined comparisons as non-matches.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.total_cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => Some(int_float_cmp(*a, *b)),
        (Value::Float(a), Value::Int(b)) => Some(int_float_cmp(*b, *a).reverse()),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Total comparator used by the in-memory order phase.
///
/// Ordering rules:
/// 1. `Null` orders before every present value
/// 2. Mixed-family values order by family rank
/// 3. Same-ranked values order by strict comparison
///
/// Mixed-family comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = family_rank(left).cmp(&family_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    strict_order_cmp(left, right).unwrap_or(Ordering::Equal)
}

// Int and Float share a rank so numeric columns holding both stay ordered.
const fn family_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
    }
}

#[expect(clippy::cast_precision_loss)]
fn int_float_cmp(int: i64, float: f64) -> Ordering {
    (int as f64).total_cmp(&float)
}
