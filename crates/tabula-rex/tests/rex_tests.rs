//! Tests for row-expression construction and printing

use tabula_expr::DataType;
use tabula_rex::*;

fn json_query_node(builder: &dyn RexBuilder) -> RexNode {
    builder.make_call(
        SqlOperator::JsonQuery,
        vec![
            builder.make_input_ref(0),
            builder.make_literal(RexLiteral::String("$.a".to_string())),
            builder.make_flag(SqlJsonQueryWrapperBehavior::WithUnconditionalArray.into()),
            builder.make_flag(SqlJsonQueryEmptyOrErrorBehavior::Null.into()),
            builder.make_flag(SqlJsonQueryEmptyOrErrorBehavior::Error.into()),
        ],
    )
}

#[test]
fn test_digest() {
    let node = json_query_node(&DefaultRexBuilder::new());
    assert_eq!(
        node.to_string(),
        "JSON_QUERY($0, '$.a', FLAG(WITH_UNCONDITIONAL_ARRAY), FLAG(NULL), FLAG(ERROR))"
    );
}

#[test]
fn test_string_literal_quotes_are_escaped() {
    let lit = RexLiteral::String("it's".to_string());
    assert_eq!(lit.to_string(), "'it''s'");
}

#[test]
fn test_flags_in_operand_order() {
    let node = json_query_node(&DefaultRexBuilder::new());
    let call = node.as_call().unwrap();

    assert_eq!(call.operand_count(), 5);
    assert_eq!(
        call.flags(),
        vec![
            Flag::JsonQueryWrapper(SqlJsonQueryWrapperBehavior::WithUnconditionalArray),
            Flag::JsonQueryEmptyOrError(SqlJsonQueryEmptyOrErrorBehavior::Null),
            Flag::JsonQueryEmptyOrError(SqlJsonQueryEmptyOrErrorBehavior::Error),
        ]
    );
    assert!(!call.operand(0).unwrap().is_flag());
}

#[test]
fn test_pretty_print_nested_call() {
    let builder = DefaultRexBuilder::new();
    let node = builder.make_typed_call(
        DataType::Integer,
        SqlOperator::JsonValue,
        vec![
            builder.make_call(SqlOperator::Upper, vec![builder.make_input_ref(1)]),
            builder.make_literal(RexLiteral::String("$.n".to_string())),
            builder.make_flag(SqlJsonValueEmptyOrErrorBehavior::Default.into()),
            builder.make_literal(RexLiteral::Integer(0)),
            builder.make_flag(SqlJsonEmptyOrError::Empty.into()),
        ],
    );

    let expected = "\
JSON_VALUE : INTEGER
  UPPER
    $1
  '$.n'
  FLAG(DEFAULT)
  0
  FLAG(EMPTY)
";
    assert_eq!(node.pretty_print(), expected);
}

#[test]
fn test_operator_classification() {
    assert!(SqlOperator::JsonQuery.is_json());
    assert!(!SqlOperator::Concat.is_json());
    assert!(SqlOperator::LessThan.is_comparison());
    assert!(!SqlOperator::And.is_comparison());
    assert_eq!(SqlOperator::Concat.to_string(), "||");
}

#[test]
fn test_json_shape() {
    let node = DefaultRexBuilder::new().make_flag(SqlJsonExistsErrorBehavior::Unknown.into());
    let json = serde_json::to_value(&node).unwrap();

    assert_eq!(json["node"], "literal");
    assert_eq!(json["kind"], "flag");
    assert_eq!(json["value"]["flag"], "JsonExistsError");
    assert_eq!(json["value"]["value"], "UNKNOWN");
}
