//! `JSON_QUERY` conversion

use super::{behavior, check_argument_count, required_literal, Arity, CustomizedConverter};
use crate::context::ConvertContext;
use crate::error::{ConvertError, ConvertResult};
use tabula_expr::{CallExpression, JsonQueryOnEmptyOrError, JsonQueryWrapper};
use tabula_rex::{
    RexNode, SqlJsonQueryEmptyOrErrorBehavior, SqlJsonQueryWrapperBehavior, SqlOperator,
};
use tracing::trace;

/// Conversion for [`BuiltInFunction::JsonQuery`](tabula_expr::BuiltInFunction::JsonQuery)
///
/// Arguments: `[json, path, wrapping, on_empty, on_error]`, the last three
/// being symbol literals. Produces
/// `JSON_QUERY(json, path, FLAG(wrapping), FLAG(on_empty), FLAG(on_error))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonQueryConverter;

impl CustomizedConverter for JsonQueryConverter {
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<RexNode> {
        check_argument_count(call, Arity::Exact(5))?;
        trace!(call = %call, "converting JSON_QUERY");

        let mut operands = Vec::with_capacity(5);
        operands.push(context.to_rex_node(&call.args[0])?);
        operands.push(context.to_rex_node(&call.args[1])?);

        let wrapping = convert_wrapping_behavior(required_literal::<JsonQueryWrapper>(
            call,
            2,
            behavior::WRAPPING,
        )?)?;
        let on_empty = convert_empty_or_error_behavior(required_literal::<
            JsonQueryOnEmptyOrError,
        >(call, 3, behavior::ON_EMPTY)?)?;
        let on_error = convert_empty_or_error_behavior(required_literal::<
            JsonQueryOnEmptyOrError,
        >(call, 4, behavior::ON_ERROR)?)?;

        let builder = context.rex_builder();
        operands.push(builder.make_flag(wrapping.into()));
        operands.push(builder.make_flag(on_empty.into()));
        operands.push(builder.make_flag(on_error.into()));

        Ok(builder.make_call(SqlOperator::JsonQuery, operands))
    }
}

pub(crate) fn convert_wrapping_behavior(
    wrapping: JsonQueryWrapper,
) -> ConvertResult<SqlJsonQueryWrapperBehavior> {
    match wrapping {
        JsonQueryWrapper::WithoutArray => Ok(SqlJsonQueryWrapperBehavior::WithoutArray),
        JsonQueryWrapper::ConditionalArray => Ok(SqlJsonQueryWrapperBehavior::WithConditionalArray),
        JsonQueryWrapper::UnconditionalArray => {
            Ok(SqlJsonQueryWrapperBehavior::WithUnconditionalArray)
        }
        other => Err(ConvertError::UnknownBehavior {
            behavior: behavior::WRAPPING,
            value: format!("{:?}", other),
        }),
    }
}

/// Shared by the ON EMPTY and ON ERROR clauses
pub(crate) fn convert_empty_or_error_behavior(
    on_empty_or_error: JsonQueryOnEmptyOrError,
) -> ConvertResult<SqlJsonQueryEmptyOrErrorBehavior> {
    match on_empty_or_error {
        JsonQueryOnEmptyOrError::Null => Ok(SqlJsonQueryEmptyOrErrorBehavior::Null),
        JsonQueryOnEmptyOrError::EmptyArray => Ok(SqlJsonQueryEmptyOrErrorBehavior::EmptyArray),
        JsonQueryOnEmptyOrError::EmptyObject => Ok(SqlJsonQueryEmptyOrErrorBehavior::EmptyObject),
        JsonQueryOnEmptyOrError::Error => Ok(SqlJsonQueryEmptyOrErrorBehavior::Error),
        other => Err(ConvertError::UnknownBehavior {
            behavior: behavior::ON_EMPTY_OR_ERROR,
            value: format!("{:?}", other),
        }),
    }
}
