use super::{Expr, Filter, SelectItem, TableWithJoins};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of a SQL query.
    pub returning: Vec<SelectItem>,

    /// The `FROM` part of a SQL query.
    pub source: TableWithJoins,

    /// Query filter
    pub filter: Filter,
}

impl Select {
    pub fn new(source: impl Into<TableWithJoins>, returning: Vec<SelectItem>) -> Self {
        Self {
            returning,
            source: source.into(),
            filter: Filter::default(),
        }
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        self.filter.add_filter(filter);
    }

    pub fn and(&mut self, expr: impl Into<Expr>) {
        self.add_filter(expr.into());
    }
}
