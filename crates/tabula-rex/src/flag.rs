//! Flag symbols
//!
//! Enumerations the optimizer understands as literal operands of SQL/JSON
//! functions. They mirror the front-end symbols but live in the IR's own
//! namespace.

use serde::{Deserialize, Serialize};

/// How `JSON_QUERY` wraps its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlJsonQueryWrapperBehavior {
    WithoutArray,
    WithConditionalArray,
    WithUnconditionalArray,
}

impl SqlJsonQueryWrapperBehavior {
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlJsonQueryWrapperBehavior::WithoutArray => "WITHOUT_ARRAY",
            SqlJsonQueryWrapperBehavior::WithConditionalArray => "WITH_CONDITIONAL_ARRAY",
            SqlJsonQueryWrapperBehavior::WithUnconditionalArray => "WITH_UNCONDITIONAL_ARRAY",
        }
    }
}

/// `JSON_QUERY ... ON EMPTY` / `ON ERROR` behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlJsonQueryEmptyOrErrorBehavior {
    Null,
    EmptyArray,
    EmptyObject,
    Error,
}

impl SqlJsonQueryEmptyOrErrorBehavior {
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlJsonQueryEmptyOrErrorBehavior::Null => "NULL",
            SqlJsonQueryEmptyOrErrorBehavior::EmptyArray => "EMPTY_ARRAY",
            SqlJsonQueryEmptyOrErrorBehavior::EmptyObject => "EMPTY_OBJECT",
            SqlJsonQueryEmptyOrErrorBehavior::Error => "ERROR",
        }
    }
}

/// `JSON_VALUE ... ON EMPTY` / `ON ERROR` behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlJsonValueEmptyOrErrorBehavior {
    Null,
    Error,
    /// Followed by the default value operand
    Default,
}

impl SqlJsonValueEmptyOrErrorBehavior {
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlJsonValueEmptyOrErrorBehavior::Null => "NULL",
            SqlJsonValueEmptyOrErrorBehavior::Error => "ERROR",
            SqlJsonValueEmptyOrErrorBehavior::Default => "DEFAULT",
        }
    }
}

/// `JSON_EXISTS ... ON ERROR` behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlJsonExistsErrorBehavior {
    True,
    False,
    Unknown,
    Error,
}

impl SqlJsonExistsErrorBehavior {
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlJsonExistsErrorBehavior::True => "TRUE",
            SqlJsonExistsErrorBehavior::False => "FALSE",
            SqlJsonExistsErrorBehavior::Unknown => "UNKNOWN",
            SqlJsonExistsErrorBehavior::Error => "ERROR",
        }
    }
}

/// Marks which clause a preceding `JSON_VALUE` behavior belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlJsonEmptyOrError {
    Empty,
    Error,
}

impl SqlJsonEmptyOrError {
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlJsonEmptyOrError::Empty => "EMPTY",
            SqlJsonEmptyOrError::Error => "ERROR",
        }
    }
}

/// Payload of a flag literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "flag", content = "value")]
pub enum Flag {
    JsonQueryWrapper(SqlJsonQueryWrapperBehavior),
    JsonQueryEmptyOrError(SqlJsonQueryEmptyOrErrorBehavior),
    JsonValueEmptyOrError(SqlJsonValueEmptyOrErrorBehavior),
    JsonExistsError(SqlJsonExistsErrorBehavior),
    JsonEmptyOrError(SqlJsonEmptyOrError),
}

impl Flag {
    /// SQL name of the wrapped symbol
    pub fn sql_name(&self) -> &'static str {
        match self {
            Flag::JsonQueryWrapper(b) => b.sql_name(),
            Flag::JsonQueryEmptyOrError(b) => b.sql_name(),
            Flag::JsonValueEmptyOrError(b) => b.sql_name(),
            Flag::JsonExistsError(b) => b.sql_name(),
            Flag::JsonEmptyOrError(m) => m.sql_name(),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_name())
    }
}

impl From<SqlJsonQueryWrapperBehavior> for Flag {
    fn from(value: SqlJsonQueryWrapperBehavior) -> Self {
        Flag::JsonQueryWrapper(value)
    }
}

impl From<SqlJsonQueryEmptyOrErrorBehavior> for Flag {
    fn from(value: SqlJsonQueryEmptyOrErrorBehavior) -> Self {
        Flag::JsonQueryEmptyOrError(value)
    }
}

impl From<SqlJsonValueEmptyOrErrorBehavior> for Flag {
    fn from(value: SqlJsonValueEmptyOrErrorBehavior) -> Self {
        Flag::JsonValueEmptyOrError(value)
    }
}

impl From<SqlJsonExistsErrorBehavior> for Flag {
    fn from(value: SqlJsonExistsErrorBehavior) -> Self {
        Flag::JsonExistsError(value)
    }
}

impl From<SqlJsonEmptyOrError> for Flag {
    fn from(value: SqlJsonEmptyOrError) -> Self {
        Flag::JsonEmptyOrError(value)
    }
}
