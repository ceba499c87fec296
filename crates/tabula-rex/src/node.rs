//! Row-expression nodes

use crate::flag::Flag;
use crate::operator::SqlOperator;
use serde::{Deserialize, Serialize};
use tabula_expr::DataType;

/// Row expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RexNode {
    /// Column of the input row: `$0`
    InputRef(RexInputRef),
    /// Constant, including flags
    Literal(RexLiteral),
    /// Operator application
    Call(RexCall),
}

impl RexNode {
    /// Get the call node, if this is one
    pub fn as_call(&self) -> Option<&RexCall> {
        match self {
            RexNode::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Get the flag payload, if this is a flag literal
    pub fn as_flag(&self) -> Option<Flag> {
        match self {
            RexNode::Literal(RexLiteral::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }

    /// Check if this is a flag literal
    pub fn is_flag(&self) -> bool {
        self.as_flag().is_some()
    }
}

impl std::fmt::Display for RexNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RexNode::InputRef(input) => write!(f, "{}", input),
            RexNode::Literal(lit) => write!(f, "{}", lit),
            RexNode::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Reference to an input column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RexInputRef {
    pub index: usize,
}

impl std::fmt::Display for RexInputRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.index)
    }
}

/// Constant values in the IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RexLiteral {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    /// Symbol understood by the operator it is passed to
    Flag(Flag),
}

impl std::fmt::Display for RexLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RexLiteral::Null => write!(f, "null"),
            RexLiteral::Boolean(b) => write!(f, "{}", b),
            RexLiteral::Integer(v) => write!(f, "{}", v),
            RexLiteral::Double(v) => write!(f, "{:?}", v),
            RexLiteral::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            RexLiteral::Flag(flag) => write!(f, "FLAG({})", flag),
        }
    }
}

/// Operator applied to an ordered list of operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RexCall {
    pub op: SqlOperator,
    pub operands: Vec<RexNode>,
    /// Declared result type; `None` lets the optimizer derive it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<DataType>,
}

impl RexCall {
    /// Number of operands
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Operand at `index`
    pub fn operand(&self, index: usize) -> Option<&RexNode> {
        self.operands.get(index)
    }

    /// Flag payloads among the operands, in order
    pub fn flags(&self) -> Vec<Flag> {
        self.operands.iter().filter_map(RexNode::as_flag).collect()
    }
}

impl std::fmt::Display for RexCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.op)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}
