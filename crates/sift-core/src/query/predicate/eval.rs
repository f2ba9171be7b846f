use crate::{
    query::{
        flatten::Params,
        predicate::ast::{CompareOp, Predicate},
    },
    value::{Value, compare_eq, compare_order, compare_text},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during predicate
/// evaluation. This distinguishes between a missing field and a present
/// field whose value is `Null`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// This decouples predicate evaluation from concrete record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

// Evaluate a field predicate only when the field is present.
fn on_present<R: Row + ?Sized>(row: &R, field: &str, f: impl FnOnce(&Value) -> bool) -> bool {
    match row.field(field) {
        FieldPresence::Present(value) => f(&value),
        FieldPresence::Missing => false,
    }
}

///
/// Evaluate a predicate against a single row, binding parameters by slot.
///
/// This function performs **pure runtime evaluation**:
/// - no schema access
/// - no I/O
/// - no validation
///
/// Any undefined comparison (family mismatch, unparseable literal, unbound
/// slot) simply evaluates to `false`.
/// CONTRACT: internal callers compile/validate predicates before evaluation.
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate, params: &Params) -> bool {
    match predicate {
        Predicate::All => true,

        Predicate::And(children) => children.iter().all(|child| eval(row, child, params)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child, params)),
        Predicate::Not(inner) => !eval(row, inner, params),

        Predicate::Compare { field, op, param } => {
            eval_compare(row, field, *op, params.resolve(*param))
        }

        Predicate::IsNull { field } => match row.field(field) {
            FieldPresence::Present(value) => value.is_null(),
            FieldPresence::Missing => true,
        },

        Predicate::IsNotNull { field } => on_present(row, field, |value| !value.is_null()),

        Predicate::Text {
            field,
            op,
            mode,
            param,
        } => match params.resolve(*param) {
            Some(literal) => on_present(row, field, |actual| {
                // NOTE: Invalid text comparisons are treated as non-matches.
                compare_text(actual, literal, *mode, *op).unwrap_or(false)
            }),
            None => false,
        },

        Predicate::InSet { field, param } => match params.resolve(*param) {
            Some(literal) => on_present(row, field, |actual| in_list(actual, literal)),
            None => false,
        },

        Predicate::Between { field, param } => match params.resolve(*param) {
            Some(literal) => on_present(row, field, |actual| between(actual, literal)),
            None => false,
        },
    }
}

///
/// Evaluate a single comparison against a row.
///
/// Returns `false` if:
/// - the parameter slot is unbound
/// - the field is missing
/// - the comparison is undefined for the field's family
///
fn eval_compare<R: Row + ?Sized>(
    row: &R,
    field: &str,
    op: CompareOp,
    literal: Option<&str>,
) -> bool {
    let Some(literal) = literal else {
        return false;
    };
    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    // NOTE: Comparison helpers return None when a comparison is invalid; eval treats that as false.
    match op {
        CompareOp::Eq => compare_eq(&actual, literal).unwrap_or(false),
        CompareOp::Ne => compare_eq(&actual, literal).is_some_and(|eq| !eq),
        CompareOp::Lt => compare_order(&actual, literal).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(&actual, literal).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(&actual, literal).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(&actual, literal).is_some_and(Ordering::is_ge),
    }
}

///
/// Check whether a value equals any element of a comma-separated literal
/// list. Elements are compared exactly; no case folding.
///
fn in_list(actual: &Value, literal: &str) -> bool {
    literal
        .split(',')
        // Invalid comparisons are treated as non-matches.
        .any(|item| compare_eq(actual, item).unwrap_or(false))
}

///
/// Inclusive two-sided range check.
///
/// The compiler guarantees exactly two bounds; a malformed literal that
/// slipped past it evaluates to `false` rather than panicking.
///
fn between(actual: &Value, literal: &str) -> bool {
    let mut parts = literal.split(',');
    let (Some(lower), Some(upper), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    compare_order(actual, lower).is_some_and(Ordering::is_ge)
        && compare_order(actual, upper).is_some_and(Ordering::is_le)
}

/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{FieldPresence, Row, eval};
    use crate::{
        query::{
            flatten::{ParamSlot, Params},
            predicate::{CompareOp, Predicate},
        },
        value::{TextMode, TextOp, Value},
    };
    use std::collections::BTreeMap;

    #[derive(Clone, Debug)]
    struct TestRow {
        fields: BTreeMap<String, Value>,
    }

    impl TestRow {
        fn with(pairs: &[(&str, Value)]) -> Self {
            Self {
                fields: pairs
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), value.clone()))
                    .collect(),
            }
        }
    }

    impl Row for TestRow {
        fn field(&self, name: &str) -> FieldPresence {
            match self.fields.get(name) {
                Some(value) => FieldPresence::Present(value.clone()),
                None => FieldPresence::Missing,
            }
        }
    }

    fn params(values: &[Option<&str>]) -> Params {
        Params::new(
            values
                .iter()
                .map(|value| value.map(ToString::to_string))
                .collect(),
        )
    }

    #[test]
    fn is_null_matches_null_and_missing_fields() {
        let row = TestRow::with(&[("age", Value::Null)]);
        let params = params(&[]);

        assert!(eval(&row, &Predicate::is_null("age"), &params));
        assert!(eval(&row, &Predicate::is_null("absent"), &params));
        assert!(!eval(&row, &Predicate::is_not_null("age"), &params));
        assert!(!eval(&row, &Predicate::is_not_null("absent"), &params));
    }

    #[test]
    fn missing_field_never_matches_a_comparison() {
        let row = TestRow::with(&[("age", Value::Int(5))]);
        let pred = Predicate::compare("absent", CompareOp::Eq, ParamSlot(0));

        assert!(!eval(&row, &pred, &params(&[Some("5")])));
    }

    #[test]
    fn unbound_slot_never_matches() {
        let row = TestRow::with(&[("age", Value::Int(5))]);
        let pred = Predicate::compare("age", CompareOp::Eq, ParamSlot(3));

        assert!(!eval(&row, &pred, &params(&[Some("5")])));
    }

    #[test]
    fn ne_on_undefined_comparison_is_false_not_true() {
        let row = TestRow::with(&[("age", Value::Int(5))]);
        let pred = Predicate::compare("age", CompareOp::Ne, ParamSlot(0));

        assert!(!eval(&row, &pred, &params(&[Some("five")])));
    }

    #[test]
    fn in_list_compares_elements_exactly() {
        let row = TestRow::with(&[("name", Value::Text("b".to_string()))]);
        let pred = Predicate::in_set("name", ParamSlot(0));

        assert!(eval(&row, &pred, &params(&[Some("a,b,c")])));
        assert!(!eval(&row, &pred, &params(&[Some("A,B,C")])));
    }

    #[test]
    fn between_trusts_but_verifies_bound_count() {
        let row = TestRow::with(&[("age", Value::Int(5))]);
        let pred = Predicate::between("age", ParamSlot(0));

        assert!(eval(&row, &pred, &params(&[Some("3,8")])));
        assert!(!eval(&row, &pred, &params(&[Some("3")])));
        assert!(!eval(&row, &pred, &params(&[Some("3,8,9")])));
    }

    #[test]
    fn text_match_folds_case_per_mode() {
        let row = TestRow::with(&[("name", Value::Text("a".to_string()))]);
        let ci = Predicate::text("name", TextOp::Contains, TextMode::Ci, ParamSlot(0));
        let cs = Predicate::text("name", TextOp::Contains, TextMode::Cs, ParamSlot(0));
        let params = params(&[Some("A")]);

        assert!(eval(&row, &ci, &params));
        assert!(!eval(&row, &cs, &params));
    }

    #[test]
    fn connectives_combine_children() {
        let row = TestRow::with(&[("age", Value::Int(5)), ("name", Value::Text("a".into()))]);
        let params = params(&[Some("10"), Some("a")]);
        let age_gte = Predicate::compare("age", CompareOp::Gte, ParamSlot(0));
        let name_eq = Predicate::compare("name", CompareOp::Eq, ParamSlot(1));

        assert!(eval(
            &row,
            &Predicate::or(vec![age_gte.clone(), name_eq.clone()]),
            &params
        ));
        assert!(!eval(&row, &Predicate::and(vec![age_gte, name_eq]), &params));
    }
}
