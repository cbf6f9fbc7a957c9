use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// Maximum number of rows, usually a constant value.
    pub limit: Expr,
}

impl Limit {
    pub fn new(limit: impl Into<Expr>) -> Self {
        Self {
            limit: limit.into(),
        }
    }
}
