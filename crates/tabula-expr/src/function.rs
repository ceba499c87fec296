//! Built-in function catalog
//!
//! Identifies the function a [`CallExpression`](crate::CallExpression) applies.
//! Argument layouts are fixed by the front-end; the planner trusts them.

use serde::{Deserialize, Serialize};

/// Built-in function definitions known to the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuiltInFunction {
    // Arithmetic
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a * b`
    Times,
    /// `a / b`
    Divide,

    // Comparison
    /// `a = b`
    Equals,
    /// `a <> b`
    NotEquals,
    /// `a > b`
    GreaterThan,
    /// `a < b`
    LessThan,
    /// `a IS NULL`
    IsNull,

    // Logic
    /// `a AND b`
    And,
    /// `a OR b`
    Or,
    /// `NOT a`
    Not,

    // Strings
    /// `UPPER(s)`
    Upper,
    /// `LOWER(s)`
    Lower,
    /// `CONCAT(s, ...)`
    Concat,

    // JSON
    /// `JSON_EXISTS(json, path [, on_error])`
    JsonExists,
    /// `JSON_VALUE(json, path, returning, on_empty, empty_default, on_error, error_default)`
    JsonValue,
    /// `JSON_QUERY(json, path, wrapping, on_empty, on_error)`
    JsonQuery,
}

impl BuiltInFunction {
    /// Name of the function as it appears in plans and error messages
    pub fn name(&self) -> &'static str {
        match self {
            BuiltInFunction::Plus => "plus",
            BuiltInFunction::Minus => "minus",
            BuiltInFunction::Times => "times",
            BuiltInFunction::Divide => "divide",
            BuiltInFunction::Equals => "equals",
            BuiltInFunction::NotEquals => "notEquals",
            BuiltInFunction::GreaterThan => "greaterThan",
            BuiltInFunction::LessThan => "lessThan",
            BuiltInFunction::IsNull => "isNull",
            BuiltInFunction::And => "and",
            BuiltInFunction::Or => "or",
            BuiltInFunction::Not => "not",
            BuiltInFunction::Upper => "upper",
            BuiltInFunction::Lower => "lower",
            BuiltInFunction::Concat => "concat",
            BuiltInFunction::JsonExists => "JSON_EXISTS",
            BuiltInFunction::JsonValue => "JSON_VALUE",
            BuiltInFunction::JsonQuery => "JSON_QUERY",
        }
    }
}

impl std::fmt::Display for BuiltInFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
