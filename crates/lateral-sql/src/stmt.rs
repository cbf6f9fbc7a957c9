mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

pub use lateral_core::stmt::*;

/// Statements the SQL serializer understands: the core query and insert
/// statements plus the DDL needed to set up tables.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Query(Query),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}

impl From<lateral_core::stmt::Statement> for Statement {
    fn from(value: lateral_core::stmt::Statement) -> Self {
        match value {
            lateral_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            lateral_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
