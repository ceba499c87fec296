//! Conversion errors

use crate::converter::Arity;
use tabula_expr::BuiltInFunction;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while lowering an expression
///
/// Every error aborts the conversion of the whole expression; no partially
/// built node is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConvertError {
    #[error("Invalid number of arguments for {function}: expected {expected}, got {actual}")]
    Arity {
        function: BuiltInFunction,
        expected: Arity,
        actual: usize,
    },

    /// A configuration argument is absent or not a literal of the expected kind
    #[error("Missing argument for {behavior} behavior of {function}")]
    MissingConfiguration {
        function: BuiltInFunction,
        behavior: &'static str,
    },

    #[error("Unknown {behavior} behavior: {value}")]
    UnknownBehavior {
        behavior: &'static str,
        value: String,
    },

    #[error("Unsupported function: {function}")]
    UnsupportedFunction { function: BuiltInFunction },

    #[error("Unsupported expression: {kind} cannot be lowered")]
    UnsupportedExpression { kind: &'static str },

    #[error("Expression nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
}
