//! Literal values and typed extraction

use crate::symbol::{
    JsonExistsOnError, JsonQueryOnEmptyOrError, JsonQueryWrapper, JsonValueOnEmptyOrError,
    TableSymbol,
};
use serde::{Deserialize, Serialize};

/// Value held by a literal expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LiteralValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Boolean(bool),
    /// Exact integer
    Integer(i64),
    /// Approximate numeric
    Double(f64),
    /// Character string
    String(String),
    /// Enumerated symbol
    Symbol(TableSymbol),
}

impl LiteralValue {
    /// Check if this is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }

    /// Extract the value as `T`, if the literal holds one
    pub fn value_as<T: FromLiteral>(&self) -> Option<T> {
        T::from_literal(self)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Boolean(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        LiteralValue::Integer(value as i64)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Double(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

impl From<TableSymbol> for LiteralValue {
    fn from(value: TableSymbol) -> Self {
        LiteralValue::Symbol(value)
    }
}

impl From<JsonQueryWrapper> for LiteralValue {
    fn from(value: JsonQueryWrapper) -> Self {
        LiteralValue::Symbol(value.into())
    }
}

impl From<JsonQueryOnEmptyOrError> for LiteralValue {
    fn from(value: JsonQueryOnEmptyOrError) -> Self {
        LiteralValue::Symbol(value.into())
    }
}

impl From<JsonValueOnEmptyOrError> for LiteralValue {
    fn from(value: JsonValueOnEmptyOrError) -> Self {
        LiteralValue::Symbol(value.into())
    }
}

impl From<JsonExistsOnError> for LiteralValue {
    fn from(value: JsonExistsOnError) -> Self {
        LiteralValue::Symbol(value.into())
    }
}

// ============================================================================
// Typed Extraction
// ============================================================================

/// Types that can be read out of a [`LiteralValue`]
///
/// Extraction never fails loudly: a literal of the wrong kind yields `None`.
pub trait FromLiteral: Sized {
    /// Convert the literal, or `None` if it holds a different kind of value
    fn from_literal(value: &LiteralValue) -> Option<Self>;
}

impl FromLiteral for bool {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for i64 {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for f64 {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Double(v) => Some(*v),
            LiteralValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromLiteral for String {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromLiteral for TableSymbol {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Symbol(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for JsonQueryWrapper {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Symbol(TableSymbol::JsonQueryWrapper(v)) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for JsonQueryOnEmptyOrError {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Symbol(TableSymbol::JsonQueryOnEmptyOrError(v)) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for JsonValueOnEmptyOrError {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Symbol(TableSymbol::JsonValueOnEmptyOrError(v)) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for JsonExistsOnError {
    fn from_literal(value: &LiteralValue) -> Option<Self> {
        match value {
            LiteralValue::Symbol(TableSymbol::JsonExistsOnError(v)) => Some(*v),
            _ => None,
        }
    }
}
