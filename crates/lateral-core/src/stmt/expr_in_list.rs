use super::Expr;

/// `expr IN (a, b, c)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list<T>(lhs: impl Into<Self>, list: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprInList {
            expr: Box::new(lhs.into()),
            list: list.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
