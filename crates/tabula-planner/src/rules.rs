//! Call Conversion Rules
//!
//! A rule either claims a call and lowers it, or returns `Ok(None)` so the
//! next rule gets a chance. Rules are tried in order:
//! 1. Direct rule → one operator, operands lowered one-to-one
//! 2. Customized rule → dedicated converter per function

use crate::context::ConvertContext;
use crate::converter::{
    check_argument_count, Arity, CustomizedConverter, JsonExistsConverter, JsonQueryConverter,
    JsonValueConverter,
};
use crate::error::ConvertResult;
use rustc_hash::FxHashMap;
use tabula_expr::{BuiltInFunction, CallExpression};
use tabula_rex::{RexNode, SqlOperator};
use tracing::trace;

/// Rule lowering a subset of call expressions
pub trait CallExpressionConvertRule: Send + Sync {
    /// Lower `call`, or return `Ok(None)` if the rule does not handle it
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<Option<RexNode>>;
}

// ============================================================================
// Direct Conversion
// ============================================================================

/// Functions that map to exactly one IR operator
const DIRECT_OPERATORS: &[(BuiltInFunction, SqlOperator, Arity)] = &[
    (BuiltInFunction::Plus, SqlOperator::Plus, Arity::Exact(2)),
    (BuiltInFunction::Minus, SqlOperator::Minus, Arity::Exact(2)),
    (BuiltInFunction::Times, SqlOperator::Multiply, Arity::Exact(2)),
    (BuiltInFunction::Divide, SqlOperator::Divide, Arity::Exact(2)),
    (BuiltInFunction::Equals, SqlOperator::Equals, Arity::Exact(2)),
    (BuiltInFunction::NotEquals, SqlOperator::NotEquals, Arity::Exact(2)),
    (BuiltInFunction::GreaterThan, SqlOperator::GreaterThan, Arity::Exact(2)),
    (BuiltInFunction::LessThan, SqlOperator::LessThan, Arity::Exact(2)),
    (BuiltInFunction::IsNull, SqlOperator::IsNull, Arity::Exact(1)),
    (BuiltInFunction::And, SqlOperator::And, Arity::AtLeast(2)),
    (BuiltInFunction::Or, SqlOperator::Or, Arity::AtLeast(2)),
    (BuiltInFunction::Not, SqlOperator::Not, Arity::Exact(1)),
    (BuiltInFunction::Upper, SqlOperator::Upper, Arity::Exact(1)),
    (BuiltInFunction::Lower, SqlOperator::Lower, Arity::Exact(1)),
    (BuiltInFunction::Concat, SqlOperator::Concat, Arity::AtLeast(1)),
];

/// Rule for functions with a one-to-one IR operator
pub struct DirectConvertRule {
    operators: FxHashMap<BuiltInFunction, (SqlOperator, Arity)>,
}

impl DirectConvertRule {
    pub fn new() -> Self {
        let mut operators = FxHashMap::default();
        for &(function, op, arity) in DIRECT_OPERATORS {
            operators.insert(function, (op, arity));
        }
        Self { operators }
    }

    /// IR operator and accepted arity for `function`
    pub fn lookup(&self, function: BuiltInFunction) -> Option<(SqlOperator, Arity)> {
        self.operators.get(&function).copied()
    }
}

impl Default for DirectConvertRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CallExpressionConvertRule for DirectConvertRule {
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<Option<RexNode>> {
        let Some((op, arity)) = self.lookup(call.function) else {
            return Ok(None);
        };
        check_argument_count(call, arity)?;
        trace!(function = %call.function, operator = %op, "direct conversion");

        let operands = call
            .args
            .iter()
            .map(|arg| context.to_rex_node(arg))
            .collect::<ConvertResult<Vec<_>>>()?;
        Ok(Some(context.rex_builder().make_call(op, operands)))
    }
}

// ============================================================================
// Customized Conversion
// ============================================================================

/// Rule dispatching to a registered [`CustomizedConverter`]
pub struct CustomizedConvertRule {
    converters: FxHashMap<BuiltInFunction, Box<dyn CustomizedConverter>>,
}

impl CustomizedConvertRule {
    /// Registry with the built-in SQL/JSON converters
    pub fn new() -> Self {
        let mut rule = Self::empty();
        rule.register(BuiltInFunction::JsonExists, Box::new(JsonExistsConverter));
        rule.register(BuiltInFunction::JsonValue, Box::new(JsonValueConverter));
        rule.register(BuiltInFunction::JsonQuery, Box::new(JsonQueryConverter));
        rule
    }

    /// Registry without any converter
    pub fn empty() -> Self {
        Self {
            converters: FxHashMap::default(),
        }
    }

    /// Register `converter` for `function`, returning the one it replaces
    pub fn register(
        &mut self,
        function: BuiltInFunction,
        converter: Box<dyn CustomizedConverter>,
    ) -> Option<Box<dyn CustomizedConverter>> {
        self.converters.insert(function, converter)
    }

    pub fn contains(&self, function: BuiltInFunction) -> bool {
        self.converters.contains_key(&function)
    }
}

impl Default for CustomizedConvertRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CallExpressionConvertRule for CustomizedConvertRule {
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<Option<RexNode>> {
        match self.converters.get(&call.function) {
            Some(converter) => converter.convert(call, context).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_table_has_no_duplicates() {
        let rule = DirectConvertRule::new();
        assert_eq!(rule.operators.len(), DIRECT_OPERATORS.len());
    }

    #[test]
    fn test_direct_and_customized_are_disjoint() {
        let direct = DirectConvertRule::new();
        let customized = CustomizedConvertRule::new();
        for function in [
            BuiltInFunction::JsonExists,
            BuiltInFunction::JsonValue,
            BuiltInFunction::JsonQuery,
        ] {
            assert!(customized.contains(function));
            assert!(direct.lookup(function).is_none());
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut rule = CustomizedConvertRule::empty();
        assert!(!rule.contains(BuiltInFunction::JsonQuery));
        assert!(rule
            .register(BuiltInFunction::JsonQuery, Box::new(JsonQueryConverter))
            .is_none());
        assert!(rule
            .register(BuiltInFunction::JsonQuery, Box::new(JsonQueryConverter))
            .is_some());
    }
}
