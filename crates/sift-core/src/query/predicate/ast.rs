use crate::{
    query::flatten::ParamSlot,
    value::{TextMode, TextOp},
};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure, backend-agnostic representation of a compiled filter. Nodes
/// reference parameter slots only; literal values live in the parameter
/// array and are bound by the interpreter or a push-down backend. All
/// interpretation occurs in later passes:
///
/// - normalization
/// - evaluation (in-memory)
/// - backend translation (push-down)
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// No constraint; every row matches.
    All,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    /// Relational comparison of a field against one bound parameter.
    Compare {
        field: String,
        op: CompareOp,
        param: ParamSlot,
    },
    /// Matches `Null` fields and fields absent from the row.
    IsNull { field: String },
    /// Matches present, non-null fields.
    IsNotNull { field: String },
    /// Substring test; case folding per `mode`.
    Text {
        field: String,
        op: TextOp,
        mode: TextMode,
        param: ParamSlot,
    },
    /// Membership in the comma-separated literal list bound at `param`.
    /// Elements are compared exactly; no case folding.
    InSet { field: String, param: ParamSlot },
    /// Inclusive two-sided range over the two comma-separated bounds bound
    /// at `param`.
    Between { field: String, param: ParamSlot },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn compare(field: impl Into<String>, op: CompareOp, param: ParamSlot) -> Self {
        Self::Compare {
            field: field.into(),
            op,
            param,
        }
    }

    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::IsNotNull {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn text(field: impl Into<String>, op: TextOp, mode: TextMode, param: ParamSlot) -> Self {
        Self::Text {
            field: field.into(),
            op,
            mode,
            param,
        }
    }

    #[must_use]
    pub fn in_set(field: impl Into<String>, param: ParamSlot) -> Self {
        Self::InSet {
            field: field.into(),
            param,
        }
    }

    #[must_use]
    pub fn between(field: impl Into<String>, param: ParamSlot) -> Self {
        Self::Between {
            field: field.into(),
            param,
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}
