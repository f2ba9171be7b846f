mod ast;
mod eval;
mod normalize;

pub use ast::{CompareOp, Predicate};
pub use eval::{FieldPresence, Row, eval};
pub use normalize::normalize;
