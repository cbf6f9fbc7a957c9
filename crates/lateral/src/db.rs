mod builder;
pub use builder::Builder;

mod connect;

use crate::{
    association, schema::Association, schema::Model, Error, Loaded, Record, Relation, Result,
    Schema,
};

use indexmap::{IndexMap, IndexSet};
use lateral_core::{
    bail,
    driver::{Driver, Operation, Response},
    stmt::{self, Expr, Insert, Value},
};
use lateral_sql::Serializer;
use tracing::debug;

use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};

/// A database handle: the schema plus the driver statements run on.
///
/// Cloning is cheap and clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    schema: Arc<Schema>,
    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Drops and recreates every table.
    pub async fn reset_db(&self) -> Result<()> {
        self.driver.reset_db(&self.schema.db).await
    }

    /// Executes a single statement.
    pub async fn exec(&self, stmt: impl Into<stmt::Statement>) -> Result<Response> {
        let stmt = stmt.into();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut params = Vec::<Value>::new();
            let sql = Serializer::postgresql().serialize(&stmt.clone().into(), &mut params);
            debug!(db.statement = %sql, db.params = params.len(), "exec");
        }

        self.driver
            .exec(&self.schema.db, Operation::from(stmt))
            .await
    }

    /// Inserts one row of `model` and returns it as stored.
    ///
    /// `created_at` and `updated_at` are filled in when the table has them and
    /// they are not given.
    pub async fn insert<'a>(
        &self,
        model: &str,
        values: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Record> {
        let model = self.schema.model(model)?.clone();

        if !self.driver.capability().returning_from_mutation {
            return Err(Error::unsupported_feature(
                "driver cannot return inserted rows",
            ));
        }

        let mut columns = vec![];
        let mut exprs = vec![];

        for (column, value) in values {
            columns.push(column.to_string());
            exprs.push(Expr::Value(value));
        }

        let now = timestamp();
        for column in ["created_at", "updated_at"] {
            let missing = !columns.iter().any(|name| name == column);

            if missing && model.table.column_by_name(column).is_some() {
                columns.push(column.to_string());
                exprs.push(Expr::Value(Value::I64(now)));
            }
        }

        let insert = Insert {
            table: model.table_ref(),
            columns,
            values: exprs,
            returning: true,
        };

        let (columns, rows) = self.exec(insert).await?.rows.into_values();

        match rows.into_iter().next() {
            Some(row) => Ok(Record::from_row(&model, &columns, row)),
            None => bail!("insert into `{}` returned no row", model.table.name),
        }
    }

    /// Loads every record the relation selects.
    pub async fn all(&self, relation: &Relation) -> Result<Vec<Record>> {
        let (columns, rows) = self.exec(relation).await?.rows.into_values();
        let model = relation.model();

        Ok(rows
            .into_iter()
            .map(|row| Record::from_row(model, &columns, row))
            .collect())
    }

    /// Loads the first record, ordering by primary key when the relation has
    /// no order of its own.
    pub async fn first(&self, relation: &Relation) -> Result<Option<Record>> {
        let mut relation = relation.clone();

        if relation.order().is_empty() {
            let primary_key = relation.model().primary_key.clone();
            relation = relation.order_by_asc(&primary_key);
        }

        let records = self.all(&relation.limit(1)).await?;
        Ok(records.into_iter().next())
    }

    /// Loads a record by primary key.
    pub async fn find(&self, model: &str, key: impl Into<Value>) -> Result<Record> {
        let model = self.schema.model(model)?;
        let key = key.into();

        let relation = model.all().where_eq(&model.primary_key, key.clone());

        self.first(&relation).await?.ok_or_else(|| {
            Error::record_not_found(format!("table={}; key={key}", model.table.name))
        })
    }

    /// Loads one association of a single record.
    pub async fn association(&self, record: &Record, name: &str) -> Result<Loaded> {
        let owner = self.schema.model(record.model())?;
        let association = owner.association(name)?;
        self.verify_lateral_join()?;

        let key = owner_key(record, association)?;
        let scope = association::scope_for_owner(&self.schema, owner, association, key)?;
        let records = self.all(&scope).await?;

        Ok(Loaded::from_records(association.is_one(), records))
    }

    /// Loads the relation, then each named association for all loaded
    /// records with one statement per association.
    pub async fn preload(&self, relation: &Relation, names: &[&str]) -> Result<Vec<Record>> {
        let associations = self.resolve_associations(relation.model(), names)?;

        let mut records = self.all(relation).await?;
        self.load_associations(relation.model(), &associations, &mut records)
            .await?;

        Ok(records)
    }

    /// Loads the named associations for records that are already loaded.
    pub async fn preload_records(
        &self,
        model: &str,
        records: &mut [Record],
        names: &[&str],
    ) -> Result<()> {
        let owner = self.schema.model(model)?.clone();
        let associations = self.resolve_associations(&owner, names)?;

        self.load_associations(&owner, &associations, records).await
    }

    /// Walks the relation in pages of `batch_size` records, ordered by
    /// primary key, preloading `names` for each page before handing it to
    /// `f`. The relation's own order and limit are replaced.
    pub async fn find_in_batches(
        &self,
        relation: &Relation,
        batch_size: u64,
        names: &[&str],
        mut f: impl FnMut(Vec<Record>) -> Result<()>,
    ) -> Result<()> {
        if batch_size == 0 {
            bail!("batch size must be greater than zero");
        }

        let primary_key = relation.model().primary_key.clone();
        let base = relation
            .clone()
            .unscope_order()
            .unscope_limit()
            .order_by_asc(&primary_key);

        let mut last: Option<Value> = None;

        loop {
            let page = match &last {
                Some(last) => base.clone().where_gt(&primary_key, last.clone()),
                None => base.clone(),
            };

            let records = self.preload(&page.limit(batch_size), names).await?;
            let len = records.len() as u64;

            let Some(tail) = records.last() else {
                break;
            };

            last = tail.get(&primary_key).cloned();
            f(records)?;

            if len < batch_size || last.is_none() {
                break;
            }
        }

        Ok(())
    }

    fn resolve_associations<'a>(
        &self,
        owner: &'a Model,
        names: &[&str],
    ) -> Result<Vec<&'a Association>> {
        let associations = names
            .iter()
            .map(|name| owner.association(name))
            .collect::<Result<Vec<_>>>()?;

        if !associations.is_empty() {
            self.verify_lateral_join()?;
        }

        Ok(associations)
    }

    async fn load_associations(
        &self,
        owner: &Arc<Model>,
        associations: &[&Association],
        records: &mut [Record],
    ) -> Result<()> {
        for association in associations {
            let keys: IndexSet<Value> = records
                .iter()
                .filter_map(|record| record.get(&association.primary_key))
                .filter(|key| !key.is_null())
                .cloned()
                .collect();

            let mut groups: IndexMap<Value, Vec<Record>> = IndexMap::new();

            if !keys.is_empty() {
                let scope =
                    association::scope_for_owners(&self.schema, owner, association, keys)?;

                for child in self.all(&scope).await? {
                    let key = child
                        .get(&association.foreign_key_alias)
                        .cloned()
                        .unwrap_or_default();
                    groups.entry(key).or_default().push(child);
                }
            }

            for record in records.iter_mut() {
                let children = record
                    .get(&association.primary_key)
                    .and_then(|key| groups.get(key))
                    .cloned()
                    .unwrap_or_default();

                record.set_loaded(
                    &association.name,
                    Loaded::from_records(association.is_one(), children),
                );
            }
        }

        Ok(())
    }

    fn verify_lateral_join(&self) -> Result<()> {
        if self.driver.capability().lateral_join {
            Ok(())
        } else {
            Err(Error::unsupported_feature(
                "driver does not support JOIN LATERAL",
            ))
        }
    }
}

fn owner_key(record: &Record, association: &Association) -> Result<Value> {
    match record.get(&association.primary_key) {
        Some(key) if !key.is_null() => Ok(key.clone()),
        _ => bail!(
            "`{}` has no `{}` to load `{}` by",
            record.model(),
            association.primary_key,
            association.name
        ),
    }
}

/// Microseconds since the Unix epoch, strictly increasing within the process
/// so rows inserted back to back still order by creation time.
fn timestamp() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as i64)
        .unwrap_or_default();

    let mut last = LAST.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);

        match LAST.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}
