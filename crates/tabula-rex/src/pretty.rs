//! Pretty-printing for row expressions
//!
//! Multi-line tree output for plan explanations. The one-line digest is the
//! `Display` impl on [`RexNode`].

use crate::node::{RexCall, RexNode};
use std::fmt::Write;

/// Trait for pretty-printing IR constructs
pub trait PrettyPrint {
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for RexNode {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        write_node(&mut output, self, 0);
        output
    }
}

impl PrettyPrint for RexCall {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        write_call(&mut output, self, 0);
        output
    }
}

fn write_node(output: &mut String, node: &RexNode, indent: usize) {
    match node {
        RexNode::Call(call) => write_call(output, call, indent),
        other => {
            writeln!(output, "{}{}", " ".repeat(indent), other).unwrap();
        }
    }
}

fn write_call(output: &mut String, call: &RexCall, indent: usize) {
    let prefix = " ".repeat(indent);
    match call.return_type {
        Some(ty) => writeln!(output, "{}{} : {}", prefix, call.op, ty).unwrap(),
        None => writeln!(output, "{}{}", prefix, call.op).unwrap(),
    }
    for operand in &call.operands {
        write_node(output, operand, indent + 2);
    }
}
