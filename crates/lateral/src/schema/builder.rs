use super::{
    Association, AssociationKind, AssociationOptions, Model, ModelId, Schema,
};
use crate::{Error, Relation, Result};

use heck::ToSnakeCase;
use indexmap::IndexMap;
use lateral_core::schema::db::{self, Column, ColumnId, Table, TableId, Type};

use std::sync::Arc;

/// Collects table and model definitions, then verifies them as a whole.
///
/// ```ignore
/// let schema = Schema::builder()
///     .table("posts", |t| {
///         t.primary_key("id");
///         t.timestamps();
///         t.column("title", Type::Text);
///     })
///     .model("Post", "posts", |m| {
///         m.has_one_of_many(
///             "last_comment",
///             "Comment",
///             |comments| comments.order_by_desc("created_at"),
///             AssociationOptions::default(),
///         );
///     })
///     .build()?;
/// ```
#[derive(Default)]
pub struct Builder {
    tables: Vec<TableBuilder>,
    models: Vec<ModelBuilder>,
}

/// Column definitions for one table, in declaration order.
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnDef>,
    primary_key: Vec<String>,
}

#[derive(Debug)]
struct ColumnDef {
    name: String,
    ty: Type,
    nullable: bool,
    auto_increment: bool,
}

pub struct ModelBuilder {
    name: String,
    table: String,
    primary_key: Option<String>,
    ignored_columns: Vec<String>,
    associations: Vec<Association>,
}

impl Builder {
    pub fn table(&mut self, name: &str, f: impl FnOnce(&mut TableBuilder)) -> &mut Self {
        let mut table = TableBuilder {
            name: name.to_string(),
            columns: vec![],
            primary_key: vec![],
        };
        f(&mut table);
        self.tables.push(table);
        self
    }

    pub fn model(
        &mut self,
        name: &str,
        table: &str,
        f: impl FnOnce(&mut ModelBuilder),
    ) -> &mut Self {
        let mut model = ModelBuilder {
            name: name.to_string(),
            table: table.to_string(),
            primary_key: None,
            ignored_columns: vec![],
            associations: vec![],
        };
        f(&mut model);
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let db = Arc::new(self.build_db_schema());
        let mut models = IndexMap::new();

        for (index, def) in self.models.iter().enumerate() {
            let table = db.table_by_name(&def.table).ok_or_else(|| {
                Error::invalid_schema(format!(
                    "model `{}` references unknown table `{}`",
                    def.name, def.table
                ))
            })?;

            let primary_key = match &def.primary_key {
                Some(primary_key) => primary_key.clone(),
                None => table
                    .primary_key_columns()
                    .next()
                    .map(|column| column.name.clone())
                    .ok_or_else(|| {
                        Error::invalid_schema(format!(
                            "table `{}` has no primary key; model `{}` must name one",
                            table.name, def.name
                        ))
                    })?,
            };

            let mut associations = IndexMap::new();

            for association in &def.associations {
                let mut association = association.clone();

                if association.primary_key.is_empty() {
                    association.primary_key = primary_key.clone();
                }

                let name = association.name.clone();
                if associations.insert(name.clone(), association).is_some() {
                    return Err(Error::invalid_schema(format!(
                        "association `{name}` defined twice on model `{}`",
                        def.name
                    )));
                }
            }

            let model = Model {
                id: ModelId(index),
                name: def.name.clone(),
                table: table.clone(),
                primary_key,
                ignored_columns: def.ignored_columns.clone(),
                associations,
            };

            if models.insert(def.name.clone(), Arc::new(model)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` defined twice",
                    def.name
                )));
            }
        }

        let schema = Schema { db, models };
        schema.verify()?;
        Ok(schema)
    }

    fn build_db_schema(&self) -> db::Schema {
        let tables = self
            .tables
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let id = TableId(index);
                let mut table = Table::new(id, &def.name);

                for (index, column) in def.columns.iter().enumerate() {
                    table.columns.push(Column {
                        id: ColumnId { table: id, index },
                        name: column.name.clone(),
                        ty: column.ty,
                        nullable: column.nullable,
                        primary_key: def.primary_key.contains(&column.name),
                        auto_increment: column.auto_increment,
                    });
                }

                table.primary_key.columns = table
                    .columns
                    .iter()
                    .filter(|column| column.primary_key)
                    .map(|column| column.id)
                    .collect();

                table
            })
            .collect();

        db::Schema { tables }
    }
}

impl TableBuilder {
    /// Adds an auto-incrementing 8-byte integer primary key column.
    pub fn primary_key(&mut self, name: &str) -> &mut Self {
        self.columns.push(ColumnDef {
            name: name.to_string(),
            ty: Type::Integer(8),
            nullable: false,
            auto_increment: true,
        });
        self.primary_key.push(name.to_string());
        self
    }

    /// Adds a `NOT NULL` column.
    pub fn column(&mut self, name: &str, ty: Type) -> &mut Self {
        self.push(name, ty, false)
    }

    pub fn nullable_column(&mut self, name: &str, ty: Type) -> &mut Self {
        self.push(name, ty, true)
    }

    /// Adds `created_at` and `updated_at`, stored as microseconds since the
    /// Unix epoch and filled in on insert.
    pub fn timestamps(&mut self) -> &mut Self {
        self.column("created_at", Type::Integer(8))
            .column("updated_at", Type::Integer(8))
    }

    fn push(&mut self, name: &str, ty: Type, nullable: bool) -> &mut Self {
        self.columns.push(ColumnDef {
            name: name.to_string(),
            ty,
            nullable,
            auto_increment: false,
        });
        self
    }
}

impl ModelBuilder {
    /// Overrides the primary key, which otherwise comes from the table.
    pub fn primary_key(&mut self, name: &str) -> &mut Self {
        self.primary_key = Some(name.to_string());
        self
    }

    /// Leaves columns out of every projection the model generates.
    pub fn ignored_columns<I>(&mut self, columns: impl IntoIterator<Item = I>) -> &mut Self
    where
        I: Into<String>,
    {
        self.ignored_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    /// Registers an association yielding the first row of `target` per
    /// parent, as ordered by `scope`.
    pub fn has_one_of_many(
        &mut self,
        name: &str,
        target: &str,
        scope: impl Fn(Relation) -> Relation + Send + Sync + 'static,
        options: AssociationOptions,
    ) -> &mut Self {
        self.association(AssociationKind::One, name, target, Arc::new(scope), options)
    }

    /// Registers an association yielding the rows `scope` keeps per parent.
    /// A `limit` applied by the scope bounds each parent separately.
    pub fn has_some_of_many(
        &mut self,
        name: &str,
        target: &str,
        scope: impl Fn(Relation) -> Relation + Send + Sync + 'static,
        options: AssociationOptions,
    ) -> &mut Self {
        self.association(AssociationKind::Many, name, target, Arc::new(scope), options)
    }

    fn association(
        &mut self,
        kind: AssociationKind,
        name: &str,
        target: &str,
        scope: super::Scope,
        options: AssociationOptions,
    ) -> &mut Self {
        let foreign_key = options
            .foreign_key
            .unwrap_or_else(|| format!("{}_id", self.name.to_snake_case()));

        let foreign_key_alias = options
            .foreign_key_alias
            .unwrap_or_else(|| format!("{foreign_key}_alias"));

        self.associations.push(Association {
            name: name.to_string(),
            kind,
            target: target.to_string(),
            scope,
            // Resolved against the model's primary key in `Builder::build`
            primary_key: options.primary_key.unwrap_or_default(),
            foreign_key,
            foreign_key_alias,
        });
        self
    }
}
