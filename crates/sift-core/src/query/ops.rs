use crate::{query::predicate::CompareOp, value::TextOp};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// FilterOperator
///
/// Fixed operator vocabulary for filter nodes. Wire names are lowercase
/// with no separators (`"doesnotcontain"`, `"isnotnull"`).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    IsNull,
    IsNotNull,
    StartsWith,
    EndsWith,
    Contains,
    DoesNotContain,
    In,
    Between,
}

///
/// ParamShape
///
/// How a node's raw value string is read when the operator renders.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParamShape {
    /// No parameter; the operator is unary.
    None,
    /// The whole string is one comparison literal.
    Single,
    /// Comma-separated literal list.
    List,
    /// Exactly two comma-separated bounds.
    Pair,
}

///
/// RenderClass
///
/// Expression kind an operator renders into.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderClass {
    Compare(CompareOp),
    NullCheck { negated: bool },
    Text { op: TextOp, negated: bool },
    Membership,
    Range,
}

///
/// OperatorSpec
///
/// One table entry per operator: parameter shape and rendering class.
/// Adding an operator means adding one entry to `FilterOperator::spec`.
///

#[derive(Clone, Copy, Debug)]
pub struct OperatorSpec {
    pub shape: ParamShape,
    pub class: RenderClass,
}

impl OperatorSpec {
    const fn new(shape: ParamShape, class: RenderClass) -> Self {
        Self { shape, class }
    }
}

impl FilterOperator {
    /// Descriptor lookup backing compiler dispatch.
    #[must_use]
    pub const fn spec(self) -> OperatorSpec {
        match self {
            Self::Eq => OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Eq)),
            Self::Neq => OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Ne)),
            Self::Lt => OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Lt)),
            Self::Lte => {
                OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Lte))
            }
            Self::Gt => OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Gt)),
            Self::Gte => {
                OperatorSpec::new(ParamShape::Single, RenderClass::Compare(CompareOp::Gte))
            }
            Self::IsNull => {
                OperatorSpec::new(ParamShape::None, RenderClass::NullCheck { negated: false })
            }
            Self::IsNotNull => {
                OperatorSpec::new(ParamShape::None, RenderClass::NullCheck { negated: true })
            }
            Self::StartsWith => OperatorSpec::new(
                ParamShape::Single,
                RenderClass::Text {
                    op: TextOp::StartsWith,
                    negated: false,
                },
            ),
            Self::EndsWith => OperatorSpec::new(
                ParamShape::Single,
                RenderClass::Text {
                    op: TextOp::EndsWith,
                    negated: false,
                },
            ),
            Self::Contains => OperatorSpec::new(
                ParamShape::Single,
                RenderClass::Text {
                    op: TextOp::Contains,
                    negated: false,
                },
            ),
            Self::DoesNotContain => OperatorSpec::new(
                ParamShape::Single,
                RenderClass::Text {
                    op: TextOp::Contains,
                    negated: true,
                },
            ),
            Self::In => OperatorSpec::new(ParamShape::List, RenderClass::Membership),
            Self::Between => OperatorSpec::new(ParamShape::Pair, RenderClass::Range),
        }
    }

    /// True for every operator except the unary null checks.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        !matches!(self.spec().shape, ParamShape::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::IsNull => "isnull",
            Self::IsNotNull => "isnotnull",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
            Self::Contains => "contains",
            Self::DoesNotContain => "doesnotcontain",
            Self::In => "in",
            Self::Between => "between",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Self::Eq),
            "neq" => Ok(Self::Neq),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "isnull" => Ok(Self::IsNull),
            "isnotnull" => Ok(Self::IsNotNull),
            "startswith" => Ok(Self::StartsWith),
            "endswith" => Ok(Self::EndsWith),
            "contains" => Ok(Self::Contains),
            "doesnotcontain" => Ok(Self::DoesNotContain),
            "in" => Ok(Self::In),
            "between" => Ok(Self::Between),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

///
/// ParseOperatorError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unrecognized filter operator '{0}'")]
pub struct ParseOperatorError(pub String);

/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{FilterOperator, ParamShape};
    use std::str::FromStr;

    const ALL: [FilterOperator; 14] = [
        FilterOperator::Eq,
        FilterOperator::Neq,
        FilterOperator::Lt,
        FilterOperator::Lte,
        FilterOperator::Gt,
        FilterOperator::Gte,
        FilterOperator::IsNull,
        FilterOperator::IsNotNull,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
        FilterOperator::Contains,
        FilterOperator::DoesNotContain,
        FilterOperator::In,
        FilterOperator::Between,
    ];

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for op in ALL {
            assert_eq!(FilterOperator::from_str(op.as_str()), Ok(op));
        }
    }

    #[test]
    fn unrecognized_operator_is_rejected() {
        assert!(FilterOperator::from_str("like").is_err());
        assert!(FilterOperator::from_str("EQ").is_err());
    }

    #[test]
    fn only_null_checks_are_unary() {
        for op in ALL {
            let unary = matches!(op, FilterOperator::IsNull | FilterOperator::IsNotNull);
            assert_eq!(op.requires_value(), !unary, "operator {op}");
            assert_eq!(matches!(op.spec().shape, ParamShape::None), unary);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for op in ALL {
            let json = serde_json::to_string(&op).expect("operator serializes");
            assert_eq!(json, format!("\"{}\"", op.as_str()));
        }
    }
}
