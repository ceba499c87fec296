//! Tabula Expression Tree
//!
//! Typed front-end expressions handed to the planner for lowering into the
//! relational IR.

#![warn(missing_docs)]

pub mod expression;
pub mod function;
pub mod literal;
pub mod symbol;
pub mod types;

pub use expression::{CallExpression, Expression, FieldReference, LiteralExpression};
pub use function::BuiltInFunction;
pub use literal::{FromLiteral, LiteralValue};
pub use symbol::{
    JsonExistsOnError, JsonQueryOnEmptyOrError, JsonQueryWrapper, JsonValueOnEmptyOrError,
    TableSymbol,
};
pub use types::DataType;
