use super::{Limit, OrderBy, Select};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query.
    pub body: Select,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new(body: Select) -> Self {
        Self {
            body,
            order_by: None,
            limit: None,
        }
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Self::new(value)
    }
}
