use super::{Expr, TableFactor};

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The relation to join
    pub relation: TableFactor,

    /// The join condition
    pub constraint: JoinOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinOp {
    Inner(Expr),
    Left(Expr),
}

impl JoinOp {
    pub fn expr(&self) -> &Expr {
        match self {
            Self::Inner(expr) | Self::Left(expr) => expr,
        }
    }
}
