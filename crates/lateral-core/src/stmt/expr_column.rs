use super::{Expr, TableRef};

/// A qualified column reference: `"table"."column"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    /// The table (or alias, or derived table) qualifying the column.
    pub table: TableRef,

    /// Column name
    pub column: String,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl ExprColumn {
    pub fn new(table: TableRef, column: impl Into<String>) -> Self {
        Self {
            table,
            column: column.into(),
        }
    }

    /// Returns a copy of this column qualified by `table` instead.
    pub fn rebind(&self, table: &TableRef) -> Self {
        Self {
            table: table.clone(),
            column: self.column.clone(),
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
