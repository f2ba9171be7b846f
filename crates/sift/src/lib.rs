//! Sift: a backend-agnostic dynamic filter/sort compiler.
//!
//! Clients describe what they want as a recursively-nestable tree of
//! field/operator/value nodes joined by boolean connectives, plus an
//! ordered sort list. Sift validates the whole specification against an
//! allow-listed schema, compiles it into a parameterized predicate AST and
//! order spec, and applies both to in-memory rows or hands them to a
//! push-down backend. Every structural error surfaces at compile time,
//! before any data-source interaction.
//!
//! ```
//! use sift::prelude::*;
//!
//! let schema = SchemaInfo::new()
//!     .with_field("age", FieldType::Int)
//!     .with_field("name", FieldType::Text);
//!
//! let query = DynamicQuery::new()
//!     .with_filter(FilterNode::new("age", FilterOperator::Gte).with_value("21"))
//!     .with_sort(vec![SortCriterion::asc("name")]);
//!
//! let compiled = sift::compile(&query, &schema)?;
//! # Ok::<(), sift::Error>(())
//! ```

pub mod error;

pub use error::Error;

pub use sift_core::query::{
    CompileError, CompiledQuery, DynamicQuery, FieldPresence, FieldType, FilterNode,
    FilterOperator, Logic, Memory, OrderDirection, OrderSpec, Predicate, Queryable, Row,
    SchemaInfo, SortCriterion, SortError, apply_slice, compile_filter, compile_sort, eval,
};
pub use sift_core::{
    query::{
        explain::explain,
        flatten::{ParamSlot, Params, flatten, params_of},
        predicate::CompareOp,
        trace::{TraceEvent, TracePhase, TraceSink},
    },
    value::{TextMode, TextOp, Value, ValueFamily},
};

/// Compile a dynamic query against the given schema.
pub fn compile(query: &DynamicQuery, schema: &SchemaInfo) -> Result<CompiledQuery, Error> {
    Ok(sift_core::query::compile(query, schema)?)
}

///
/// Prelude
///
/// Domain vocabulary only; no errors, appliers, or helpers.
///

pub mod prelude {
    pub use sift_core::{
        query::{
            DynamicQuery, FieldType, FilterNode, FilterOperator, Logic, OrderDirection,
            SchemaInfo, SortCriterion,
        },
        value::Value,
    };
}
