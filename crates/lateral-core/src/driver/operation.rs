mod query_sql;
pub use query_sql::QuerySql;

use crate::stmt;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a SQL statement
    QuerySql(QuerySql),
}

impl Operation {
    pub fn stmt(&self) -> &stmt::Statement {
        match self {
            Self::QuerySql(op) => &op.stmt,
        }
    }
}
