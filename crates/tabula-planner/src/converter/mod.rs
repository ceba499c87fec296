//! Customized Converters
//!
//! Functions whose operands cannot be lowered one-to-one. Each converter
//! validates its argument list, reads literal configuration arguments and
//! emits them as IR flags.

mod json_exists;
mod json_query;
mod json_value;

pub use json_exists::JsonExistsConverter;
pub use json_query::JsonQueryConverter;
pub use json_value::JsonValueConverter;

use crate::context::ConvertContext;
use crate::error::{ConvertError, ConvertResult};
use tabula_expr::{CallExpression, FromLiteral, TableSymbol};
use tabula_rex::{Flag, RexNode};

/// Names of configuration arguments, as reported in errors
pub(crate) mod behavior {
    pub const WRAPPING: &str = "wrapping";
    pub const ON_EMPTY: &str = "on-empty";
    pub const ON_ERROR: &str = "on-error";
    pub const ON_EMPTY_OR_ERROR: &str = "on-empty/on-error";
    pub const RETURNING: &str = "returning type";
}

/// Conversion of a single built-in function
pub trait CustomizedConverter: Send + Sync {
    fn convert(&self, call: &CallExpression, context: &dyn ConvertContext)
        -> ConvertResult<RexNode>;
}

// ============================================================================
// Argument Validation
// ============================================================================

/// Accepted number of call arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive bounds
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{} to {}", min, max),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Fail unless `call` has an accepted number of arguments
pub fn check_argument_count(call: &CallExpression, arity: Arity) -> ConvertResult<()> {
    if arity.accepts(call.arg_count()) {
        Ok(())
    } else {
        Err(ConvertError::Arity {
            function: call.function,
            expected: arity,
            actual: call.arg_count(),
        })
    }
}

/// Read the literal configuration argument at `index`
///
/// General expressions and literals of another kind count as missing.
pub(crate) fn required_literal<T: FromLiteral>(
    call: &CallExpression,
    index: usize,
    behavior: &'static str,
) -> ConvertResult<T> {
    call.arg(index)
        .and_then(|arg| arg.value_as::<T>())
        .ok_or(ConvertError::MissingConfiguration {
            function: call.function,
            behavior,
        })
}

/// Flag for a symbol literal found outside a configuration slot
pub(crate) fn symbol_to_flag(symbol: TableSymbol) -> ConvertResult<Flag> {
    let flag: Flag = match symbol {
        TableSymbol::JsonQueryWrapper(w) => json_query::convert_wrapping_behavior(w)?.into(),
        TableSymbol::JsonQueryOnEmptyOrError(b) => {
            json_query::convert_empty_or_error_behavior(b)?.into()
        }
        TableSymbol::JsonValueOnEmptyOrError(b) => {
            json_value::convert_empty_or_error_behavior(b)?.into()
        }
        TableSymbol::JsonExistsOnError(b) => json_exists::convert_error_behavior(b)?.into(),
    };
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_expr::{BuiltInFunction, Expression, JsonQueryWrapper};

    fn call_with(count: usize) -> CallExpression {
        CallExpression::new(
            BuiltInFunction::JsonQuery,
            (0..count).map(|i| Expression::field("f", i)).collect(),
        )
    }

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Exact(5).accepts(5));
        assert!(!Arity::Exact(5).accepts(4));
        assert!(Arity::Range(2, 3).accepts(2));
        assert!(Arity::Range(2, 3).accepts(3));
        assert!(!Arity::Range(2, 3).accepts(4));
        assert!(Arity::AtLeast(1).accepts(9));
        assert!(!Arity::AtLeast(1).accepts(0));
    }

    #[test]
    fn test_check_argument_count_reports_counts() {
        let err = check_argument_count(&call_with(4), Arity::Exact(5)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Arity {
                function: BuiltInFunction::JsonQuery,
                expected: Arity::Exact(5),
                actual: 4,
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments for JSON_QUERY: expected 5, got 4"
        );
    }

    #[test]
    fn test_required_literal_out_of_range_is_missing() {
        let err = required_literal::<JsonQueryWrapper>(&call_with(1), 2, behavior::WRAPPING)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::MissingConfiguration {
                function: BuiltInFunction::JsonQuery,
                behavior: "wrapping",
            }
        );
    }

    #[test]
    fn test_symbol_to_flag() {
        let flag = symbol_to_flag(TableSymbol::JsonQueryWrapper(
            JsonQueryWrapper::ConditionalArray,
        ))
        .unwrap();
        assert_eq!(flag.sql_name(), "WITH_CONDITIONAL_ARRAY");
    }
}
