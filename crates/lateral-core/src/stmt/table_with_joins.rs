use super::{Join, TableFactor};

#[derive(Debug, Clone, PartialEq)]
pub struct TableWithJoins {
    /// Identify a table
    pub relation: TableFactor,

    /// Joins to apply
    pub joins: Vec<Join>,
}

impl TableWithJoins {
    pub fn new(relation: impl Into<TableFactor>) -> Self {
        Self {
            relation: relation.into(),
            joins: vec![],
        }
    }
}

impl<T> From<T> for TableWithJoins
where
    TableFactor: From<T>,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
