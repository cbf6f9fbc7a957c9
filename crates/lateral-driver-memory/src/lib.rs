//! An in-process driver that evaluates statements directly against tables
//! held in memory.
//!
//! It understands the statement shapes the query builder produces: table
//! scans (optionally aliased), derived tables, `JOIN LATERAL` subqueries
//! correlated with the enclosing row, filters with SQL's three-valued logic,
//! ordering with PostgreSQL's null placement, and limits.

mod eval;
use eval::Eval;

mod table;
use table::Table;

use indexmap::IndexMap;
use lateral_core::{
    driver::{Capability, Operation, Response},
    err,
    schema::db::Schema,
    stmt::Statement,
    Driver, Result,
};
use tracing::trace;

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct Memory {
    tables: Mutex<IndexMap<String, Table>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, IndexMap<String, Table>>> {
        self.tables
            .lock()
            .map_err(|_| err!("memory driver state poisoned"))
    }
}

#[lateral_core::async_trait]
impl Driver for Memory {
    fn capability(&self) -> &Capability {
        &Capability::MEMORY
    }

    async fn exec(&self, _schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let Operation::QuerySql(op) = op;

        match op.stmt {
            Statement::Query(query) => {
                let tables = self.tables()?;
                let (columns, records) = Eval::new(&tables).query(&query, None)?;

                trace!(rows = records.len(), "memory query");
                Ok(Response::values(columns, records))
            }
            Statement::Insert(insert) => {
                let mut tables = self.tables()?;
                let table = table::get_mut(&mut tables, insert.table.name())?;
                let row = table.insert(&insert)?;

                trace!(table = %table.name, "memory insert");

                if insert.returning {
                    Ok(Response::values(table.column_names(), vec![row]))
                } else {
                    Ok(Response::count(1))
                }
            }
        }
    }

    async fn reset_db(&self, schema: &Schema) -> Result<()> {
        let mut tables = self.tables()?;
        tables.clear();

        for table in &schema.tables {
            tables.insert(table.name.clone(), Table::new(table));
        }

        Ok(())
    }
}
