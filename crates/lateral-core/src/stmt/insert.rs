use super::{Expr, TableRef};

/// Inserts a single row and returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: TableRef,

    /// Columns being assigned, positionally matching `values`.
    pub columns: Vec<String>,

    pub values: Vec<Expr>,

    /// When true, the inserted row (including generated columns) is returned.
    pub returning: bool,
}
