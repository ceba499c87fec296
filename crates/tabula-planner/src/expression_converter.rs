//! Expression Lowering
//!
//! Lowers whole front-end expression trees by walking them and dispatching
//! every call to the first conversion rule that accepts it.

use crate::config::PlannerConfig;
use crate::context::ConvertContext;
use crate::converter::symbol_to_flag;
use crate::error::{ConvertError, ConvertResult};
use crate::rules::{CallExpressionConvertRule, CustomizedConvertRule, DirectConvertRule};
use std::sync::Arc;
use tabula_expr::{CallExpression, Expression, LiteralValue};
use tabula_rex::{DefaultRexBuilder, RexBuilder, RexLiteral, RexNode};
use tracing::debug;

/// Front-end expression to row-expression lowerer
///
/// Immutable once built; a single instance can serve many threads.
pub struct ExpressionConverter {
    rules: Vec<Box<dyn CallExpressionConvertRule>>,
    builder: Arc<dyn RexBuilder>,
    config: PlannerConfig,
}

impl ExpressionConverter {
    /// Create a converter with the default builder and rules
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_builder(config, Arc::new(DefaultRexBuilder::new()))
    }

    /// Create a converter that builds nodes through `builder`
    pub fn with_builder(config: PlannerConfig, builder: Arc<dyn RexBuilder>) -> Self {
        let rules: Vec<Box<dyn CallExpressionConvertRule>> = vec![
            Box::new(DirectConvertRule::new()),
            Box::new(CustomizedConvertRule::new()),
        ];
        Self::from_rules(config, builder, rules)
    }

    /// Create a converter trying exactly `rules`, in order
    pub fn from_rules(
        config: PlannerConfig,
        builder: Arc<dyn RexBuilder>,
        rules: Vec<Box<dyn CallExpressionConvertRule>>,
    ) -> Self {
        Self {
            rules,
            builder,
            config,
        }
    }

    /// Append a rule, tried after the existing ones
    pub fn with_rule(mut self, rule: Box<dyn CallExpressionConvertRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Lower `expr` into a row expression
    pub fn convert(&self, expr: &Expression) -> ConvertResult<RexNode> {
        self.convert_at(expr, 0)
    }

    fn convert_at(&self, expr: &Expression, depth: usize) -> ConvertResult<RexNode> {
        if depth > self.config.max_expression_depth {
            return Err(ConvertError::DepthExceeded {
                max: self.config.max_expression_depth,
            });
        }

        match expr {
            Expression::FieldRef(field) => Ok(self.builder.make_input_ref(field.index)),
            Expression::Literal(lit) => self.convert_literal(&lit.value),
            Expression::TypeLiteral { .. } => Err(ConvertError::UnsupportedExpression {
                kind: expr.kind(),
            }),
            Expression::Call(call) => self.convert_call(call, depth),
        }
    }

    fn convert_literal(&self, value: &LiteralValue) -> ConvertResult<RexNode> {
        let literal = match value {
            LiteralValue::Null => RexLiteral::Null,
            LiteralValue::Boolean(b) => RexLiteral::Boolean(*b),
            LiteralValue::Integer(v) => RexLiteral::Integer(*v),
            LiteralValue::Double(v) => RexLiteral::Double(*v),
            LiteralValue::String(s) => RexLiteral::String(s.clone()),
            LiteralValue::Symbol(symbol) => {
                return Ok(self.builder.make_flag(symbol_to_flag(*symbol)?));
            }
        };
        Ok(self.builder.make_literal(literal))
    }

    fn convert_call(&self, call: &CallExpression, depth: usize) -> ConvertResult<RexNode> {
        debug!(function = %call.function, args = call.arg_count(), depth, "lowering call");

        let context = LoweringContext {
            converter: self,
            depth,
        };
        for rule in &self.rules {
            if let Some(node) = rule.convert(call, &context)? {
                return Ok(node);
            }
        }
        Err(ConvertError::UnsupportedFunction {
            function: call.function,
        })
    }
}

impl Default for ExpressionConverter {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Context for the rules lowering one call at `depth`
struct LoweringContext<'a> {
    converter: &'a ExpressionConverter,
    depth: usize,
}

impl ConvertContext for LoweringContext<'_> {
    fn to_rex_node(&self, expr: &Expression) -> ConvertResult<RexNode> {
        self.converter.convert_at(expr, self.depth + 1)
    }

    fn rex_builder(&self) -> &dyn RexBuilder {
        self.converter.builder.as_ref()
    }
}
