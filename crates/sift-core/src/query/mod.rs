//! Dynamic query compilation: wire model, flattening, the predicate AST,
//! sort lowering, and the appliers that execute compiled output.

pub mod compile;
pub mod execute;
pub mod explain;
pub mod filter;
pub mod flatten;
pub mod ops;
pub mod predicate;
pub mod schema;
pub mod sort;
pub mod trace;

#[cfg(test)]
mod tests;

// re-exports
pub use compile::{CompileError, CompiledQuery, compile, compile_filter};
pub use execute::{Memory, Queryable, apply_slice};
pub use filter::{DynamicQuery, FilterNode, Logic, OrderDirection, SortCriterion};
pub use ops::FilterOperator;
pub use predicate::{FieldPresence, Predicate, Row, eval, normalize};
pub use schema::{FieldType, SchemaInfo};
pub use sort::{OrderSpec, SortError, compile_sort};
