use sift_core::query::{CompileError, SortError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the facade. Every variant is a structural
/// client-input failure detected at compile time; callers surface it as a
/// request-validation error, never a server fault.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// TESTS
///
