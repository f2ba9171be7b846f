use crate::query::ops::FilterOperator;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// FilterNode
///
/// One node of the client-supplied filter tree. Pure data: invalid
/// intermediate states are representable here and rejected by the
/// compiler, never by the model itself.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterNode {
    pub field: String,

    pub operator: FilterOperator,

    /// Raw comparison literal; required by all operators except the null
    /// checks. Membership and range operators read it as a comma-separated
    /// list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Connective joining this node's own expression with its children.
    /// Required exactly when `children` is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<Logic>,

    /// Applies to string-matching operators only; default is case-folded.
    #[serde(default)]
    pub case_sensitive: bool,

    #[serde(default, rename = "filters", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FilterNode>,
}

impl FilterNode {
    #[must_use]
    pub fn new(field: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            field: field.into(),
            operator,
            value: None,
            logic: None,
            case_sensitive: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Attach sub-filters joined under the given connective.
    #[must_use]
    pub fn group(mut self, logic: Logic, children: Vec<Self>) -> Self {
        self.logic = Some(logic);
        self.children = children;
        self
    }

    /// Total number of nodes in this tree, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

///
/// Logic
///
/// Boolean connective for joining a node's expression with its children.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    And,
    Or,
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
        }
    }
}

impl FromStr for Logic {
    type Err = ParseLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(ParseLogicError(other.to_string())),
        }
    }
}

///
/// ParseLogicError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid logic connective '{0}'; expected 'and' or 'or'")]
pub struct ParseLogicError(pub String);

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

///
/// ParseDirectionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid sort direction '{0}'; expected 'asc' or 'desc'")]
pub struct ParseDirectionError(pub String);

///
/// SortCriterion
///
/// One key of a multi-key ordering; earlier criteria take precedence.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SortCriterion {
    pub field: String,

    #[serde(rename = "dir")]
    pub direction: OrderDirection,
}

impl SortCriterion {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }
}

///
/// DynamicQuery
///
/// Client-supplied query specification: an optional filter tree and an
/// ordered sort list. Either or both absent is the identity transform.
/// Constructed once per request from deserialized input; never mutated.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DynamicQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortCriterion>,
}

impl DynamicQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: None,
            sort: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterNode) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortCriterion>) -> Self {
        self.sort = sort;
        self
    }
}

/// TESTS
///
