use crate::{schema::Model, Error, Result};

use indexmap::IndexMap;
use lateral_core::stmt::{Value, ValueRecord};

/// A row loaded for a model, plus any associations loaded alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    model: String,

    /// Column values in the order the statement returned them
    values: IndexMap<String, Value>,

    associations: IndexMap<String, Loaded>,
}

/// Result of loading one association for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    One(Option<Box<Record>>),
    Many(Vec<Record>),
}

impl Record {
    /// Builds a record from a returned row. Ignored columns are dropped even
    /// if the statement returned them.
    pub(crate) fn from_row(model: &Model, columns: &[String], row: ValueRecord) -> Self {
        let values = columns
            .iter()
            .cloned()
            .zip(row.into_vec())
            .filter(|(column, _)| !model.is_ignored(column))
            .collect();

        Self {
            model: model.name.clone(),
            values,
            associations: IndexMap::new(),
        }
    }

    /// Name of the model the record was loaded for.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Reads a column and converts it, failing if the column is absent or
    /// holds a value of another type.
    pub fn try_get<T>(&self, column: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        let value = self.get(column).cloned().ok_or_else(|| {
            lateral_core::err!("column `{column}` not loaded on `{}`", self.model)
        })?;

        T::try_from(value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// The record loaded through a one-of-many association.
    ///
    /// # Panics
    ///
    /// Panics if the association was not loaded or is not one-of-many.
    #[track_caller]
    pub fn one(&self, name: &str) -> Option<&Record> {
        match self.associations.get(name) {
            Some(Loaded::One(record)) => record.as_deref(),
            Some(Loaded::Many(_)) => panic!("association `{name}` is has-some-of-many"),
            None => panic!("association `{name}` not loaded on `{}`", self.model),
        }
    }

    /// The records loaded through a some-of-many association.
    ///
    /// # Panics
    ///
    /// Panics if the association was not loaded or is not some-of-many.
    #[track_caller]
    pub fn many(&self, name: &str) -> &[Record] {
        match self.associations.get(name) {
            Some(Loaded::Many(records)) => records,
            Some(Loaded::One(_)) => panic!("association `{name}` is has-one-of-many"),
            None => panic!("association `{name}` not loaded on `{}`", self.model),
        }
    }

    pub fn loaded(&self, name: &str) -> Option<&Loaded> {
        self.associations.get(name)
    }

    pub(crate) fn set_loaded(&mut self, name: &str, loaded: Loaded) {
        self.associations.insert(name.to_string(), loaded);
    }
}

impl Loaded {
    pub(crate) fn from_records(one: bool, mut records: Vec<Record>) -> Self {
        if one {
            // Rows come back ordered by the scope, so the first one wins
            Loaded::One(if records.is_empty() {
                None
            } else {
                Some(Box::new(records.swap_remove(0)))
            })
        } else {
            Loaded::Many(records)
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Loaded::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Loaded::One(record) => usize::from(record.is_some()),
            Loaded::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
