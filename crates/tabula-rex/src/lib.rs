//! Tabula Row-Expression IR
//!
//! The relational expression ("rex") representation produced by the planner
//! and consumed by the optimizer. Nodes are plain immutable values; they are
//! created through a [`RexBuilder`] so callers can substitute their own
//! construction strategy.

pub mod builder;
pub mod flag;
pub mod node;
pub mod operator;
pub mod pretty;

pub use builder::{DefaultRexBuilder, RexBuilder};
pub use flag::{
    Flag, SqlJsonEmptyOrError, SqlJsonExistsErrorBehavior, SqlJsonQueryEmptyOrErrorBehavior,
    SqlJsonQueryWrapperBehavior, SqlJsonValueEmptyOrErrorBehavior,
};
pub use node::{RexCall, RexInputRef, RexLiteral, RexNode};
pub use operator::SqlOperator;
pub use pretty::PrettyPrint;
