//! Conversion context
//!
//! Capabilities a conversion rule needs from its caller: recursive lowering
//! of sub-expressions and a builder for new nodes.

use crate::error::ConvertResult;
use tabula_expr::Expression;
use tabula_rex::{RexBuilder, RexNode};

/// Context handed to conversion rules
pub trait ConvertContext {
    /// Lower a sub-expression, propagating its errors unchanged
    fn to_rex_node(&self, expr: &Expression) -> ConvertResult<RexNode>;

    /// Builder for the nodes the rule creates
    fn rex_builder(&self) -> &dyn RexBuilder;
}
