//! Core compiler for Sift: wire model, tree flattening, the predicate AST,
//! schema-gated compilation, and the in-memory query applier. The public
//! ergonomics are exported via the `sift` facade crate.

pub mod query;
pub mod value;
