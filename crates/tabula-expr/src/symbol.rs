//! Table API symbols
//!
//! Enumerated configuration values that functions receive as literal
//! arguments (e.g. the wrapping behavior of `JSON_QUERY`). The sets are
//! `#[non_exhaustive]`: the front-end may grow new members, so code outside
//! this crate has to account for values it does not know yet.

use serde::{Deserialize, Serialize};

/// Array wrapping applied to `JSON_QUERY` results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum JsonQueryWrapper {
    /// Return the query result as is
    WithoutArray,
    /// Wrap the result in an array unless it already is one
    ConditionalArray,
    /// Always wrap the result in an array
    UnconditionalArray,
}

/// Substitute returned by `JSON_QUERY` when the path yields nothing or fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum JsonQueryOnEmptyOrError {
    /// Return SQL NULL
    Null,
    /// Return `[]`
    EmptyArray,
    /// Return `{}`
    EmptyObject,
    /// Raise a runtime error
    Error,
}

/// Substitute returned by `JSON_VALUE` when the path yields nothing or fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum JsonValueOnEmptyOrError {
    /// Return SQL NULL
    Null,
    /// Raise a runtime error
    Error,
    /// Return the accompanying default expression
    Default,
}

/// Result of `JSON_EXISTS` when evaluating the path fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum JsonExistsOnError {
    /// Return TRUE
    True,
    /// Return FALSE
    False,
    /// Return UNKNOWN (NULL)
    Unknown,
    /// Raise a runtime error
    Error,
}

/// Any symbol that can be carried by a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "symbol", content = "value")]
pub enum TableSymbol {
    /// `JSON_QUERY` wrapping behavior
    JsonQueryWrapper(JsonQueryWrapper),
    /// `JSON_QUERY` ON EMPTY / ON ERROR behavior
    JsonQueryOnEmptyOrError(JsonQueryOnEmptyOrError),
    /// `JSON_VALUE` ON EMPTY / ON ERROR behavior
    JsonValueOnEmptyOrError(JsonValueOnEmptyOrError),
    /// `JSON_EXISTS` ON ERROR behavior
    JsonExistsOnError(JsonExistsOnError),
}

impl From<JsonQueryWrapper> for TableSymbol {
    fn from(value: JsonQueryWrapper) -> Self {
        TableSymbol::JsonQueryWrapper(value)
    }
}

impl From<JsonQueryOnEmptyOrError> for TableSymbol {
    fn from(value: JsonQueryOnEmptyOrError) -> Self {
        TableSymbol::JsonQueryOnEmptyOrError(value)
    }
}

impl From<JsonValueOnEmptyOrError> for TableSymbol {
    fn from(value: JsonValueOnEmptyOrError) -> Self {
        TableSymbol::JsonValueOnEmptyOrError(value)
    }
}

impl From<JsonExistsOnError> for TableSymbol {
    fn from(value: JsonExistsOnError) -> Self {
        TableSymbol::JsonExistsOnError(value)
    }
}

impl std::fmt::Display for TableSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSymbol::JsonQueryWrapper(v) => write!(f, "{:?}", v),
            TableSymbol::JsonQueryOnEmptyOrError(v) => write!(f, "{:?}", v),
            TableSymbol::JsonValueOnEmptyOrError(v) => write!(f, "{:?}", v),
            TableSymbol::JsonExistsOnError(v) => write!(f, "{:?}", v),
        }
    }
}
