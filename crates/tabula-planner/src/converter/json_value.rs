//! `JSON_VALUE` conversion

use super::{behavior, check_argument_count, required_literal, Arity, CustomizedConverter};
use crate::context::ConvertContext;
use crate::error::{ConvertError, ConvertResult};
use tabula_expr::{CallExpression, JsonValueOnEmptyOrError};
use tabula_rex::{RexNode, SqlJsonEmptyOrError, SqlJsonValueEmptyOrErrorBehavior, SqlOperator};
use tracing::trace;

/// Conversion for [`BuiltInFunction::JsonValue`](tabula_expr::BuiltInFunction::JsonValue)
///
/// Arguments: `[json, path, returning, on_empty, empty_default, on_error,
/// error_default]`. Each clause becomes `FLAG(behavior)`, then the lowered
/// default when the behavior is `DEFAULT`, then the clause marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValueConverter;

impl CustomizedConverter for JsonValueConverter {
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<RexNode> {
        check_argument_count(call, Arity::Exact(7))?;
        trace!(call = %call, "converting JSON_VALUE");

        let returning = call.args[2].as_type_literal().ok_or(
            ConvertError::MissingConfiguration {
                function: call.function,
                behavior: behavior::RETURNING,
            },
        )?;

        let mut operands = Vec::with_capacity(8);
        operands.push(context.to_rex_node(&call.args[0])?);
        operands.push(context.to_rex_node(&call.args[1])?);
        operands.extend(behavior_operands(call, context, SqlJsonEmptyOrError::Empty)?);
        operands.extend(behavior_operands(call, context, SqlJsonEmptyOrError::Error)?);

        Ok(context
            .rex_builder()
            .make_typed_call(returning, SqlOperator::JsonValue, operands))
    }
}

fn behavior_operands(
    call: &CallExpression,
    context: &dyn ConvertContext,
    mode: SqlJsonEmptyOrError,
) -> ConvertResult<Vec<RexNode>> {
    let (index, name) = match mode {
        SqlJsonEmptyOrError::Empty => (3, behavior::ON_EMPTY),
        SqlJsonEmptyOrError::Error => (5, behavior::ON_ERROR),
    };
    let behavior =
        convert_empty_or_error_behavior(required_literal::<JsonValueOnEmptyOrError>(
            call, index, name,
        )?)?;

    let builder = context.rex_builder();
    let mut operands = vec![builder.make_flag(behavior.into())];
    if behavior == SqlJsonValueEmptyOrErrorBehavior::Default {
        operands.push(context.to_rex_node(&call.args[index + 1])?);
    }
    operands.push(builder.make_flag(mode.into()));
    Ok(operands)
}

pub(crate) fn convert_empty_or_error_behavior(
    on_empty_or_error: JsonValueOnEmptyOrError,
) -> ConvertResult<SqlJsonValueEmptyOrErrorBehavior> {
    match on_empty_or_error {
        JsonValueOnEmptyOrError::Null => Ok(SqlJsonValueEmptyOrErrorBehavior::Null),
        JsonValueOnEmptyOrError::Error => Ok(SqlJsonValueEmptyOrErrorBehavior::Error),
        JsonValueOnEmptyOrError::Default => Ok(SqlJsonValueEmptyOrErrorBehavior::Default),
        other => Err(ConvertError::UnknownBehavior {
            behavior: behavior::ON_EMPTY_OR_ERROR,
            value: format!("{:?}", other),
        }),
    }
}
