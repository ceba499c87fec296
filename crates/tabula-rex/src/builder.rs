//! Row-expression construction
//!
//! Conversion rules never build nodes directly; they go through a
//! [`RexBuilder`] handed to them by the caller.

use crate::flag::Flag;
use crate::node::{RexCall, RexInputRef, RexLiteral, RexNode};
use crate::operator::SqlOperator;
use tabula_expr::DataType;

/// Factory for row-expression nodes
pub trait RexBuilder: Send + Sync {
    /// Reference to input column `index`
    fn make_input_ref(&self, index: usize) -> RexNode;

    /// Constant literal
    fn make_literal(&self, value: RexLiteral) -> RexNode;

    /// Flag literal carrying an IR symbol
    fn make_flag(&self, flag: Flag) -> RexNode;

    /// Call whose result type is derived later
    fn make_call(&self, op: SqlOperator, operands: Vec<RexNode>) -> RexNode;

    /// Call with an explicit result type
    fn make_typed_call(
        &self,
        return_type: DataType,
        op: SqlOperator,
        operands: Vec<RexNode>,
    ) -> RexNode;
}

/// Builder producing plain [`RexNode`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRexBuilder;

impl DefaultRexBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }
}

impl RexBuilder for DefaultRexBuilder {
    fn make_input_ref(&self, index: usize) -> RexNode {
        RexNode::InputRef(RexInputRef { index })
    }

    fn make_literal(&self, value: RexLiteral) -> RexNode {
        RexNode::Literal(value)
    }

    fn make_flag(&self, flag: Flag) -> RexNode {
        RexNode::Literal(RexLiteral::Flag(flag))
    }

    fn make_call(&self, op: SqlOperator, operands: Vec<RexNode>) -> RexNode {
        RexNode::Call(RexCall {
            op,
            operands,
            return_type: None,
        })
    }

    fn make_typed_call(
        &self,
        return_type: DataType,
        op: SqlOperator,
        operands: Vec<RexNode>,
    ) -> RexNode {
        RexNode::Call(RexCall {
            op,
            operands,
            return_type: Some(return_type),
        })
    }
}
