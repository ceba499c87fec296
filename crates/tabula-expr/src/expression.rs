//! Expression tree nodes

use crate::function::BuiltInFunction;
use crate::literal::{FromLiteral, LiteralValue};
use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// Resolved front-end expression
///
/// Only [`Expression::Literal`] carries a value that can be read at planning
/// time. Every other variant is a general expression and must be lowered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// Reference to a field of the input row
    FieldRef(FieldReference),

    /// Constant value
    Literal(LiteralExpression),

    /// Type used as an argument, e.g. `RETURNING INTEGER`
    TypeLiteral {
        /// Referenced type
        data_type: DataType,
    },

    /// Function application
    Call(CallExpression),
}

impl Expression {
    /// Field reference to input column `index`
    pub fn field(name: impl Into<String>, index: usize) -> Self {
        Expression::FieldRef(FieldReference {
            name: name.into(),
            index,
        })
    }

    /// Literal holding `value`
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expression::Literal(LiteralExpression {
            value: value.into(),
        })
    }

    /// SQL NULL literal
    pub fn null() -> Self {
        Expression::Literal(LiteralExpression {
            value: LiteralValue::Null,
        })
    }

    /// Type literal
    pub fn type_literal(data_type: DataType) -> Self {
        Expression::TypeLiteral { data_type }
    }

    /// Call of `function` with `args`
    pub fn call(function: BuiltInFunction, args: Vec<Expression>) -> Self {
        Expression::Call(CallExpression::new(function, args))
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::FieldRef(_) => "field reference",
            Expression::Literal(_) => "literal",
            Expression::TypeLiteral { .. } => "type literal",
            Expression::Call(_) => "call",
        }
    }

    /// Check if this expression is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal(_))
    }

    /// Get the literal node, if this is one
    pub fn as_literal(&self) -> Option<&LiteralExpression> {
        match self {
            Expression::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Read the literal value as `T`
    ///
    /// Returns `None` for general expressions and for literals that do not
    /// hold a `T`.
    pub fn value_as<T: FromLiteral>(&self) -> Option<T> {
        self.as_literal().and_then(LiteralExpression::value_as)
    }

    /// Get the referenced type, if this is a type literal
    pub fn as_type_literal(&self) -> Option<DataType> {
        match self {
            Expression::TypeLiteral { data_type } => Some(*data_type),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::FieldRef(field) => write!(f, "{}", field.name),
            Expression::Literal(lit) => write!(f, "{}", lit),
            Expression::TypeLiteral { data_type } => write!(f, "{}", data_type),
            Expression::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Input field resolved to its position in the input row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReference {
    /// Field name, kept for display
    pub name: String,
    /// Position in the input row
    pub index: usize,
}

/// Constant expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpression {
    /// Literal value
    pub value: LiteralValue,
}

impl LiteralExpression {
    /// Read the value as `T`, or `None` if it holds something else
    pub fn value_as<T: FromLiteral>(&self) -> Option<T> {
        self.value.value_as()
    }
}

impl std::fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            LiteralValue::Null => write!(f, "NULL"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Integer(v) => write!(f, "{}", v),
            LiteralValue::Double(v) => write!(f, "{}", v),
            LiteralValue::String(s) => write!(f, "'{}'", s),
            LiteralValue::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}

/// Application of a built-in function to its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Applied function
    pub function: BuiltInFunction,
    /// Arguments in call order
    pub args: Vec<Expression>,
}

impl CallExpression {
    /// Create a new call expression
    pub fn new(function: BuiltInFunction, args: Vec<Expression>) -> Self {
        Self { function, args }
    }

    /// Number of arguments
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Argument at `index`
    pub fn arg(&self, index: usize) -> Option<&Expression> {
        self.args.get(index)
    }
}

impl std::fmt::Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
