use super::ColumnId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKey {
    /// Columns that make up the primary key, in key order.
    pub columns: Vec<ColumnId>,
}
