//! Engine error types

use arbiter_core::{Operator, Value};
use thiserror::Error;

/// Evaluation error
///
/// Only produced in strict mode; lenient evaluation degrades these cases to
/// a non-matching condition instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Operand types are not comparable under the given operator
    #[error("Type mismatch: cannot apply {operator} to {left:?} and {right:?}")]
    TypeMismatch {
        operator: Operator,
        left: Value,
        right: Value,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
