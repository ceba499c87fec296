//! Operators of the row-expression IR

use serde::{Deserialize, Serialize};

/// Operator applied by a [`RexCall`](crate::RexCall)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlOperator {
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,

    // Comparison
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    IsNull,

    // Logic
    And,
    Or,
    Not,

    // Strings
    Upper,
    Lower,
    Concat,

    // SQL/JSON
    JsonExists,
    JsonValue,
    JsonQuery,
}

impl SqlOperator {
    /// Name used in plan digests
    pub fn name(&self) -> &'static str {
        match self {
            SqlOperator::Plus => "+",
            SqlOperator::Minus => "-",
            SqlOperator::Multiply => "*",
            SqlOperator::Divide => "/",
            SqlOperator::Equals => "=",
            SqlOperator::NotEquals => "<>",
            SqlOperator::GreaterThan => ">",
            SqlOperator::LessThan => "<",
            SqlOperator::IsNull => "IS NULL",
            SqlOperator::And => "AND",
            SqlOperator::Or => "OR",
            SqlOperator::Not => "NOT",
            SqlOperator::Upper => "UPPER",
            SqlOperator::Lower => "LOWER",
            SqlOperator::Concat => "||",
            SqlOperator::JsonExists => "JSON_EXISTS",
            SqlOperator::JsonValue => "JSON_VALUE",
            SqlOperator::JsonQuery => "JSON_QUERY",
        }
    }

    /// Check if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            SqlOperator::Equals
                | SqlOperator::NotEquals
                | SqlOperator::GreaterThan
                | SqlOperator::LessThan
        )
    }

    /// Check if this is a SQL/JSON function
    pub fn is_json(&self) -> bool {
        matches!(
            self,
            SqlOperator::JsonExists | SqlOperator::JsonValue | SqlOperator::JsonQuery
        )
    }
}

impl std::fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
