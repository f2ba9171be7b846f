use crate::value::{ValueFamily, coerce_to_family};
use std::collections::BTreeMap;

///
/// FieldType
///
/// Scalar classification for allow-listed fields. Deliberately smaller
/// than a full type system; exists only to support:
/// - literal compatibility checks
/// - operator validity (text matching)
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Bool,
    Float,
    Int,
    Text,
}

impl FieldType {
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn family(self) -> ValueFamily {
        match self {
            Self::Bool => ValueFamily::Bool,
            Self::Float => ValueFamily::Float,
            Self::Int => ValueFamily::Int,
            Self::Text => ValueFamily::Text,
        }
    }

    /// True when a raw literal parses into this type.
    #[must_use]
    pub fn accepts_literal(self, literal: &str) -> bool {
        coerce_to_family(literal, self.family()).is_some()
    }
}

///
/// SchemaInfo
///
/// Allow-listed field-name → type map for one record shape. This is the
/// *only* schema surface the compilers depend on: any field not present
/// here is rejected before evaluation. Build it from the record type,
/// never from client input.
///

#[derive(Clone, Debug, Default)]
pub struct SchemaInfo {
    fields: BTreeMap<String, FieldType>,
}

impl SchemaInfo {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, ty: FieldType) {
        self.fields.insert(name.into(), ty);
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// TESTS
///
