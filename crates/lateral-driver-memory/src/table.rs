use indexmap::IndexMap;
use lateral_core::{
    schema::db,
    stmt::{Expr, Insert, Value, ValueRecord},
    Error, Result,
};

/// Rows of one table plus the counter backing its auto-increment column.
#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) name: String,
    pub(crate) columns: Vec<db::Column>,
    pub(crate) rows: Vec<ValueRecord>,
    next_id: i64,
}

pub(crate) fn get<'a>(tables: &'a IndexMap<String, Table>, name: &str) -> Result<&'a Table> {
    tables
        .get(name)
        .ok_or_else(|| Error::invalid_statement(format!("relation \"{name}\" does not exist")))
}

pub(crate) fn get_mut<'a>(
    tables: &'a mut IndexMap<String, Table>,
    name: &str,
) -> Result<&'a mut Table> {
    tables
        .get_mut(name)
        .ok_or_else(|| Error::invalid_statement(format!("relation \"{name}\" does not exist")))
}

impl Table {
    pub(crate) fn new(schema: &db::Table) -> Self {
        Self {
            name: schema.name.clone(),
            columns: schema.columns.clone(),
            rows: vec![],
            next_id: 1,
        }
    }

    pub(crate) fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Appends a row and returns it with generated values filled in.
    pub(crate) fn insert(&mut self, insert: &Insert) -> Result<ValueRecord> {
        let mut row = ValueRecord::from_vec(vec![Value::Null; self.columns.len()]);

        for (name, expr) in insert.columns.iter().zip(&insert.values) {
            let index = self.column_index(name)?;

            let Expr::Value(value) = expr else {
                return Err(Error::unsupported_feature(
                    "only literal values can be inserted",
                ));
            };

            row[index] = value.clone();
        }

        for (index, column) in self.columns.iter().enumerate() {
            if column.auto_increment {
                let generate = match row[index] {
                    Value::Null => true,
                    Value::I64(id) => {
                        self.next_id = self.next_id.max(id + 1);
                        false
                    }
                    _ => false,
                };

                if generate {
                    row[index] = Value::I64(self.next_id);
                    self.next_id += 1;
                }
            }

            let value = &row[index];

            if value.is_null() && !column.nullable {
                return Err(Error::invalid_statement(format!(
                    "null value in column \"{}\" of relation \"{}\" violates not-null constraint",
                    column.name, self.name
                )));
            }

            if !column.ty.accepts(value) {
                return Err(Error::invalid_statement(format!(
                    "column \"{}\" is of type {:?} but expression is of type {}",
                    column.name,
                    column.ty,
                    value.kind_name()
                )));
            }
        }

        self.rows.push(row.clone());
        Ok(row)
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| {
                Error::invalid_statement(format!(
                    "column \"{name}\" of relation \"{}\" does not exist",
                    self.name
                ))
            })
    }
}
