use super::Association;
use crate::{Error, Relation, Result};

use indexmap::IndexMap;
use lateral_core::{schema::db, stmt::TableRef};

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(pub usize);

/// An application model backed by one table.
#[derive(Debug)]
pub struct Model {
    pub id: ModelId,

    /// Name of the model, e.g. `Post`
    pub name: String,

    /// The table the model reads from and writes to
    pub table: db::Table,

    /// Primary key column name
    pub primary_key: String,

    /// Columns left out of the default projection
    pub ignored_columns: Vec<String>,

    pub associations: IndexMap<String, Association>,
}

impl Model {
    /// The unaliased reference to the model's table.
    pub fn table_ref(&self) -> TableRef {
        TableRef::table(&self.table.name)
    }

    pub fn has_ignored_columns(&self) -> bool {
        !self.ignored_columns.is_empty()
    }

    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignored_columns.iter().any(|ignored| ignored == column)
    }

    /// Table columns minus ignored ones, in table order.
    pub fn active_columns(&self) -> impl Iterator<Item = &db::Column> + '_ {
        self.table
            .columns
            .iter()
            .filter(|column| !self.is_ignored(&column.name))
    }

    pub fn association(&self, name: &str) -> Result<&Association> {
        self.associations
            .get(name)
            .ok_or_else(|| Error::unknown_association(&self.name, name))
    }

    /// A relation selecting every row of the model.
    pub fn all(self: &Arc<Self>) -> Relation {
        Relation::new(self.clone())
    }
}
