
use crate::{
    query::predicate::{FieldPresence, Row},
    value::Value,
};
use std::collections::BTreeMap;

///
/// TestRow
///
/// Field-map row used across the query test suite.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl TestRow {
    pub(crate) fn with(pairs: &[(&str, Value)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        }
    }

    pub(crate) fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::Text(text)) => Some(text.as_str()),
            _ => None,
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

// The two-record fixture the operator semantics tests revolve around.
pub(crate) fn people() -> Vec<TestRow> {
    vec![
        TestRow::with(&[
            ("name", Value::Text("a".to_string())),
            ("age", Value::Int(5)),
        ]),
        TestRow::with(&[
            ("name", Value::Text("b".to_string())),
            ("age", Value::Int(10)),
        ]),
    ]
}
