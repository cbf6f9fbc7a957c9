use super::{Model, Schema};
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_names_are_unique()?;

        for model in self.schema.models() {
            self.verify_primary_key(model)?;
            self.verify_ignored_columns(model)?;
            self.verify_association_targets(model)?;
        }

        Ok(())
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.schema.db.tables {
            if !names.insert(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` defined twice",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_primary_key(&self, model: &Model) -> Result<()> {
        if model.table.column_by_name(&model.primary_key).is_none() {
            return Err(Error::invalid_schema(format!(
                "primary key `{}` of model `{}` is not a column of `{}`",
                model.primary_key, model.name, model.table.name
            )));
        }

        if model.is_ignored(&model.primary_key) {
            return Err(Error::invalid_schema(format!(
                "primary key `{}` of model `{}` cannot be ignored",
                model.primary_key, model.name
            )));
        }

        Ok(())
    }

    fn verify_ignored_columns(&self, model: &Model) -> Result<()> {
        for column in &model.ignored_columns {
            if model.table.column_by_name(column).is_none() {
                return Err(Error::invalid_schema(format!(
                    "ignored column `{column}` of model `{}` is not a column of `{}`",
                    model.name, model.table.name
                )));
            }
        }

        Ok(())
    }

    // Key columns are deliberately left alone: a misnamed foreign key is
    // reported by the database when the statement runs.
    fn verify_association_targets(&self, model: &Model) -> Result<()> {
        for association in model.associations.values() {
            if self.schema.model(&association.target).is_err() {
                return Err(Error::invalid_schema(format!(
                    "association `{}` on model `{}` targets unknown model `{}`",
                    association.name, model.name, association.target
                )));
            }
        }

        Ok(())
    }
}
