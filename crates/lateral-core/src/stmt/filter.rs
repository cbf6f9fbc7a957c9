use super::Expr;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub expr: Option<Expr>,
}

impl Filter {
    pub fn new(expr: Option<Expr>) -> Self {
        Self { expr }
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    /// ANDs `filter` onto the current predicate.
    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        match (self.expr.take(), filter.into().expr) {
            (Some(expr), Some(other)) => {
                self.expr = Some(Expr::and(expr, other));
            }
            (Some(expr), None) => {
                self.expr = Some(expr);
            }
            (_, other) => {
                self.expr = other;
            }
        }
    }
}

impl From<Expr> for Filter {
    fn from(value: Expr) -> Self {
        Filter { expr: Some(value) }
    }
}

impl From<Option<Expr>> for Filter {
    fn from(value: Option<Expr>) -> Self {
        Filter { expr: value }
    }
}
