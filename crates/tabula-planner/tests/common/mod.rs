//! Shared test harness: a conversion context that records what it lowers
//! and a builder that counts the nodes it creates.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use tabula_expr::{DataType, Expression, LiteralValue};
use tabula_planner::{ConvertContext, ConvertError, ConvertResult};
use tabula_rex::{DefaultRexBuilder, Flag, RexBuilder, RexLiteral, RexNode, SqlOperator};

/// Builder counting flag and call construction
#[derive(Default)]
pub struct CountingBuilder {
    inner: DefaultRexBuilder,
    pub flags: AtomicUsize,
    pub calls: AtomicUsize,
}

impl CountingBuilder {
    pub fn flag_count(&self) -> usize {
        self.flags.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RexBuilder for CountingBuilder {
    fn make_input_ref(&self, index: usize) -> RexNode {
        self.inner.make_input_ref(index)
    }

    fn make_literal(&self, value: RexLiteral) -> RexNode {
        self.inner.make_literal(value)
    }

    fn make_flag(&self, flag: Flag) -> RexNode {
        self.flags.fetch_add(1, Ordering::SeqCst);
        self.inner.make_flag(flag)
    }

    fn make_call(&self, op: SqlOperator, operands: Vec<RexNode>) -> RexNode {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.make_call(op, operands)
    }

    fn make_typed_call(
        &self,
        return_type: DataType,
        op: SqlOperator,
        operands: Vec<RexNode>,
    ) -> RexNode {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.make_typed_call(return_type, op, operands)
    }
}

/// Context lowering field references and scalar literals only
#[derive(Default)]
pub struct RecordingContext {
    pub builder: CountingBuilder,
    pub lowered: RefCell<Vec<Expression>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lowered(&self) -> Vec<Expression> {
        self.lowered.borrow().clone()
    }
}

impl ConvertContext for RecordingContext {
    fn to_rex_node(&self, expr: &Expression) -> ConvertResult<RexNode> {
        self.lowered.borrow_mut().push(expr.clone());
        match expr {
            Expression::FieldRef(field) => Ok(self.builder.make_input_ref(field.index)),
            Expression::Literal(lit) => match &lit.value {
                LiteralValue::String(s) => {
                    Ok(self.builder.make_literal(RexLiteral::String(s.clone())))
                }
                LiteralValue::Integer(v) => Ok(self.builder.make_literal(RexLiteral::Integer(*v))),
                LiteralValue::Null => Ok(self.builder.make_literal(RexLiteral::Null)),
                _ => Err(ConvertError::UnsupportedExpression { kind: expr.kind() }),
            },
            _ => Err(ConvertError::UnsupportedExpression { kind: expr.kind() }),
        }
    }

    fn rex_builder(&self) -> &dyn RexBuilder {
        &self.builder
    }
}

pub fn doc() -> Expression {
    Expression::field("doc", 0)
}

pub fn path(path: &str) -> Expression {
    Expression::literal(path)
}
