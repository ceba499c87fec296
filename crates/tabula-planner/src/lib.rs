//! Tabula Planner - Call Expression Lowering
//!
//! Converts front-end call expressions into row-expression IR. Each function
//! is handled by a conversion rule: plain operators through a direct table,
//! SQL/JSON functions through dedicated converters that validate their
//! arguments and turn literal configuration into IR flags.

pub mod config;
pub mod context;
pub mod converter;
pub mod error;
pub mod expression_converter;
pub mod rules;

pub use config::{ConfigError, PlannerConfig};
pub use context::ConvertContext;
pub use converter::{
    check_argument_count, Arity, CustomizedConverter, JsonExistsConverter, JsonQueryConverter,
    JsonValueConverter,
};
pub use error::{ConvertError, ConvertResult};
pub use expression_converter::ExpressionConverter;
pub use rules::{CallExpressionConvertRule, CustomizedConvertRule, DirectConvertRule};
