//! `JSON_EXISTS` conversion

use super::{behavior, check_argument_count, required_literal, Arity, CustomizedConverter};
use crate::context::ConvertContext;
use crate::error::{ConvertError, ConvertResult};
use tabula_expr::{CallExpression, JsonExistsOnError};
use tabula_rex::{RexNode, SqlJsonExistsErrorBehavior, SqlOperator};
use tracing::trace;

/// Conversion for [`BuiltInFunction::JsonExists`](tabula_expr::BuiltInFunction::JsonExists)
///
/// The ON ERROR clause is optional; without it the call has two operands.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExistsConverter;

impl CustomizedConverter for JsonExistsConverter {
    fn convert(
        &self,
        call: &CallExpression,
        context: &dyn ConvertContext,
    ) -> ConvertResult<RexNode> {
        check_argument_count(call, Arity::Range(2, 3))?;
        trace!(call = %call, "converting JSON_EXISTS");

        let mut operands = Vec::with_capacity(3);
        operands.push(context.to_rex_node(&call.args[0])?);
        operands.push(context.to_rex_node(&call.args[1])?);

        if call.arg_count() == 3 {
            let on_error = convert_error_behavior(required_literal::<JsonExistsOnError>(
                call,
                2,
                behavior::ON_ERROR,
            )?)?;
            operands.push(context.rex_builder().make_flag(on_error.into()));
        }

        Ok(context
            .rex_builder()
            .make_call(SqlOperator::JsonExists, operands))
    }
}

pub(crate) fn convert_error_behavior(
    on_error: JsonExistsOnError,
) -> ConvertResult<SqlJsonExistsErrorBehavior> {
    match on_error {
        JsonExistsOnError::True => Ok(SqlJsonExistsErrorBehavior::True),
        JsonExistsOnError::False => Ok(SqlJsonExistsErrorBehavior::False),
        JsonExistsOnError::Unknown => Ok(SqlJsonExistsErrorBehavior::Unknown),
        JsonExistsOnError::Error => Ok(SqlJsonExistsErrorBehavior::Error),
        other => Err(ConvertError::UnknownBehavior {
            behavior: behavior::ON_ERROR,
            value: format!("{:?}", other),
        }),
    }
}
