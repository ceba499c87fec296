//! Tests for JSON_VALUE conversion

mod common;

use common::{doc, path, RecordingContext};
use tabula_expr::*;
use tabula_planner::{ConvertError, CustomizedConverter, JsonValueConverter};
use tabula_rex::*;

fn json_value(
    on_empty: Expression,
    empty_default: Expression,
    on_error: Expression,
    error_default: Expression,
) -> CallExpression {
    CallExpression::new(
        BuiltInFunction::JsonValue,
        vec![
            doc(),
            path("$.n"),
            Expression::type_literal(DataType::Integer),
            on_empty,
            empty_default,
            on_error,
            error_default,
        ],
    )
}

#[test]
fn test_null_behaviors_have_no_default_operand() {
    let call = json_value(
        Expression::literal(JsonValueOnEmptyOrError::Null),
        Expression::null(),
        Expression::literal(JsonValueOnEmptyOrError::Error),
        Expression::null(),
    );
    let context = RecordingContext::new();

    let node = JsonValueConverter.convert(&call, &context).unwrap();

    assert_eq!(
        node.to_string(),
        "JSON_VALUE($0, '$.n', FLAG(NULL), FLAG(EMPTY), FLAG(ERROR), FLAG(ERROR))"
    );
    assert_eq!(node.as_call().unwrap().return_type, Some(DataType::Integer));
    assert_eq!(context.lowered(), vec![doc(), path("$.n")]);
}

#[test]
fn test_default_behaviors_lower_default_values() {
    let call = json_value(
        Expression::literal(JsonValueOnEmptyOrError::Default),
        Expression::literal(0),
        Expression::literal(JsonValueOnEmptyOrError::Default),
        Expression::literal(-1),
    );
    let context = RecordingContext::new();

    let node = JsonValueConverter.convert(&call, &context).unwrap();

    assert_eq!(
        node.to_string(),
        "JSON_VALUE($0, '$.n', FLAG(DEFAULT), 0, FLAG(EMPTY), FLAG(DEFAULT), -1, FLAG(ERROR))"
    );
    assert_eq!(
        context.lowered(),
        vec![doc(), path("$.n"), Expression::literal(0), Expression::literal(-1)]
    );
}

#[test]
fn test_mode_markers_follow_each_clause() {
    let call = json_value(
        Expression::literal(JsonValueOnEmptyOrError::Error),
        Expression::null(),
        Expression::literal(JsonValueOnEmptyOrError::Default),
        Expression::literal("n/a"),
    );

    let node = JsonValueConverter
        .convert(&call, &RecordingContext::new())
        .unwrap();

    assert_eq!(
        node.as_call().unwrap().flags(),
        vec![
            Flag::JsonValueEmptyOrError(SqlJsonValueEmptyOrErrorBehavior::Error),
            Flag::JsonEmptyOrError(SqlJsonEmptyOrError::Empty),
            Flag::JsonValueEmptyOrError(SqlJsonValueEmptyOrErrorBehavior::Default),
            Flag::JsonEmptyOrError(SqlJsonEmptyOrError::Error),
        ]
    );
}

#[test]
fn test_missing_returning_type() {
    let mut call = json_value(
        Expression::literal(JsonValueOnEmptyOrError::Null),
        Expression::null(),
        Expression::literal(JsonValueOnEmptyOrError::Null),
        Expression::null(),
    );
    call.args[2] = Expression::literal("INTEGER");
    let context = RecordingContext::new();

    let err = JsonValueConverter.convert(&call, &context).unwrap_err();

    assert_eq!(
        err,
        ConvertError::MissingConfiguration {
            function: BuiltInFunction::JsonValue,
            behavior: "returning type",
        }
    );
    assert!(context.lowered().is_empty());
}

#[test]
fn test_missing_on_error_behavior() {
    let call = json_value(
        Expression::literal(JsonValueOnEmptyOrError::Null),
        Expression::null(),
        Expression::field("behavior", 2),
        Expression::null(),
    );
    let context = RecordingContext::new();

    let err = JsonValueConverter.convert(&call, &context).unwrap_err();

    assert_eq!(
        err,
        ConvertError::MissingConfiguration {
            function: BuiltInFunction::JsonValue,
            behavior: "on-error",
        }
    );
    assert_eq!(context.builder.call_count(), 0);
}

#[test]
fn test_wrong_arity() {
    let call = CallExpression::new(BuiltInFunction::JsonValue, vec![doc(), path("$.n")]);
    let err = JsonValueConverter
        .convert(&call, &RecordingContext::new())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of arguments for JSON_VALUE: expected 7, got 2"
    );
}
