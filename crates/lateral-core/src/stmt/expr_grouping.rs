use super::Expr;

/// A parenthesized expression.
///
/// Groupings are kept as explicit nodes so that `a AND (b OR c)` renders the
/// way the caller built it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprGrouping {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn grouping(expr: impl Into<Self>) -> Self {
        ExprGrouping {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprGrouping> for Expr {
    fn from(value: ExprGrouping) -> Self {
        Self::Grouping(value)
    }
}
