use super::{Expr, TableRef};

/// One entry in a `SELECT` list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// An unaliased expression
    Expr(Expr),

    /// `expr AS alias`
    Alias { expr: Expr, alias: String },

    /// `"table".*`
    Wildcard(TableRef),
}

impl SelectItem {
    pub fn alias(expr: impl Into<Expr>, alias: impl Into<String>) -> Self {
        Self::Alias {
            expr: expr.into(),
            alias: alias.into(),
        }
    }
}

impl From<Expr> for SelectItem {
    fn from(value: Expr) -> Self {
        Self::Expr(value)
    }
}

impl From<super::ExprColumn> for SelectItem {
    fn from(value: super::ExprColumn) -> Self {
        Self::Expr(value.into())
    }
}
