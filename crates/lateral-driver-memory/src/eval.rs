use crate::table::{self, Table};

use indexmap::IndexMap;
use lateral_core::{
    stmt::{
        BinaryOp, Direction, Expr, ExprColumn, Join, JoinOp, OrderByExpr, Query, SelectItem,
        TableFactor, TableRef, Value, ValueRecord,
    },
    Error, Result,
};

use std::{cmp::Ordering, sync::Arc};

/// Evaluates queries against a snapshot of the tables.
pub(crate) struct Eval<'a> {
    tables: &'a IndexMap<String, Table>,
}

/// Columns of one `FROM` item, visible under `qualifier`.
#[derive(Debug, Clone)]
struct Shape {
    qualifier: String,
    columns: Arc<[String]>,
}

/// A `FROM` item evaluated to rows.
struct Source {
    shape: Shape,
    rows: Vec<Vec<Value>>,
}

/// One row of a (possibly joined) `FROM` clause: values per `FROM` item,
/// positionally matching the query's shapes.
type Row = Vec<Vec<Value>>;

/// Name resolution scope. Columns not found in the current row are looked up
/// in the enclosing rows, which is how correlated subqueries see their
/// parent.
#[derive(Clone, Copy)]
pub(crate) struct Env<'a> {
    shapes: &'a [Shape],
    row: &'a [Vec<Value>],
    outer: Option<&'a Env<'a>>,
}

impl<'a> Eval<'a> {
    pub(crate) fn new(tables: &'a IndexMap<String, Table>) -> Self {
        Self { tables }
    }

    /// Runs a query, returning its column names and rows.
    pub(crate) fn query(
        &self,
        query: &Query,
        outer: Option<&Env<'_>>,
    ) -> Result<(Vec<String>, Vec<ValueRecord>)> {
        let select = &query.body;

        let source = self.table_factor(&select.source.relation, outer)?;
        let mut shapes = vec![source.shape];
        let mut rows: Vec<Row> = source.rows.into_iter().map(|values| vec![values]).collect();

        for join in &select.source.joins {
            rows = self.join(&mut shapes, rows, join, outer)?;
        }

        if let Some(filter) = &select.filter.expr {
            let mut kept = Vec::with_capacity(rows.len());

            for row in rows {
                if self.predicate(filter, &Env::new(&shapes, &row, outer))? {
                    kept.push(row);
                }
            }

            rows = kept;
        }

        if let Some(order_by) = &query.order_by {
            rows = self.sort(&shapes, rows, &order_by.exprs, outer)?;
        }

        if let Some(limit) = &query.limit {
            let empty = Env::new(&[], &[], outer);

            match self.expr(&limit.limit, &empty)? {
                Value::Null => {}
                Value::I64(limit) if limit >= 0 => {
                    rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
                }
                Value::I64(_) => {
                    return Err(Error::invalid_statement("LIMIT must not be negative"));
                }
                value => {
                    return Err(Error::invalid_statement(format!(
                        "argument of LIMIT must be an integer, not {}",
                        value.kind_name()
                    )));
                }
            }
        }

        self.project(&shapes, &rows, &select.returning, outer)
    }

    fn table_factor(&self, factor: &TableFactor, outer: Option<&Env<'_>>) -> Result<Source> {
        match factor {
            TableFactor::Table(TableRef::Table { name, alias }) => {
                let table = table::get(self.tables, name)?;

                Ok(Source {
                    shape: Shape {
                        qualifier: alias.clone().unwrap_or_else(|| name.clone()),
                        columns: table.column_names().into(),
                    },
                    rows: table.rows.iter().map(|row| row.fields.clone()).collect(),
                })
            }
            TableFactor::Table(TableRef::Derived { name }) => Err(Error::invalid_statement(
                format!("relation \"{name}\" does not exist"),
            )),
            TableFactor::Derived {
                subquery, alias, ..
            } => {
                let (columns, records) = self.query(subquery, outer)?;

                Ok(Source {
                    shape: Shape {
                        qualifier: alias.clone(),
                        columns: columns.into(),
                    },
                    rows: records.into_iter().map(ValueRecord::into_vec).collect(),
                })
            }
        }
    }

    fn join(
        &self,
        shapes: &mut Vec<Shape>,
        rows: Vec<Row>,
        join: &Join,
        outer: Option<&Env<'_>>,
    ) -> Result<Vec<Row>> {
        let lateral = matches!(join.relation, TableFactor::Derived { lateral: true, .. });

        // A lateral subquery is evaluated once per left row, so its shape is
        // only known after the first evaluation.
        let uncorrelated = if lateral {
            None
        } else {
            Some(self.table_factor(&join.relation, outer)?)
        };

        let mut right_shape = uncorrelated.as_ref().map(|source| source.shape.clone());
        let mut joined = vec![];

        for left in rows {
            let right = match &uncorrelated {
                Some(source) => source.rows.clone(),
                None => {
                    let env = Env::new(shapes, &left, outer);
                    let source = self.table_factor(&join.relation, Some(&env))?;
                    right_shape.get_or_insert(source.shape);
                    source.rows
                }
            };

            let Some(shape) = &right_shape else {
                continue;
            };

            let mut all_shapes = shapes.clone();
            all_shapes.push(shape.clone());

            let mut matched = false;

            for values in right {
                let mut row = left.clone();
                row.push(values);

                if self.predicate(join.constraint.expr(), &Env::new(&all_shapes, &row, outer))? {
                    matched = true;
                    joined.push(row);
                }
            }

            if !matched && matches!(join.constraint, JoinOp::Left(_)) {
                let mut row = left;
                row.push(vec![Value::Null; shape.columns.len()]);
                joined.push(row);
            }
        }

        match right_shape {
            Some(shape) => shapes.push(shape),
            // Nothing on the left to correlate with; the shape is still
            // needed for the projection.
            None => shapes.push(self.lateral_shape(&join.relation)?),
        }

        Ok(joined)
    }

    /// Shape of a lateral subquery when there is no row to evaluate it
    /// against. Columns from the correlated side resolve to `NULL`.
    fn lateral_shape(&self, factor: &TableFactor) -> Result<Shape> {
        let TableFactor::Derived {
            subquery, alias, ..
        } = factor
        else {
            return Err(Error::invalid_statement("LATERAL requires a subquery"));
        };

        let mut query = (**subquery).clone();
        query.body.filter.expr = Some(Expr::from(false));

        let (columns, _) = self.query(&query, None)?;

        Ok(Shape {
            qualifier: alias.clone(),
            columns: columns.into(),
        })
    }

    fn sort(
        &self,
        shapes: &[Shape],
        rows: Vec<Row>,
        order_by: &[OrderByExpr],
        outer: Option<&Env<'_>>,
    ) -> Result<Vec<Row>> {
        let mut keyed = rows
            .into_iter()
            .map(|row| -> Result<(Vec<Value>, Row)> {
                let env = Env::new(shapes, &row, outer);
                let keys = order_by
                    .iter()
                    .map(|order_by| self.expr(&order_by.expr, &env))
                    .collect::<Result<Vec<_>>>()?;
                Ok((keys, row))
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable, so ties keep insertion order
        keyed.sort_by(|(a, _), (b, _)| {
            a.iter()
                .zip(b)
                .zip(order_by)
                .map(|((a, b), order_by)| compare(a, b, order_by.order))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }

    fn project(
        &self,
        shapes: &[Shape],
        rows: &[Row],
        items: &[SelectItem],
        outer: Option<&Env<'_>>,
    ) -> Result<(Vec<String>, Vec<ValueRecord>)> {
        let mut columns = vec![];

        for item in items {
            match item {
                SelectItem::Expr(Expr::Column(column)) => columns.push(column.column.clone()),
                SelectItem::Expr(_) => columns.push("?column?".to_string()),
                SelectItem::Alias { alias, .. } => columns.push(alias.clone()),
                SelectItem::Wildcard(table) => {
                    let index = shape_index(shapes, table.qualifier())?;
                    columns.extend(shapes[index].columns.iter().cloned());
                }
            }
        }

        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            let env = Env::new(shapes, row, outer);
            let mut record = ValueRecord::default();

            for item in items {
                match item {
                    SelectItem::Expr(expr) | SelectItem::Alias { expr, .. } => {
                        record.fields.push(self.expr(expr, &env)?);
                    }
                    SelectItem::Wildcard(table) => {
                        let index = shape_index(shapes, table.qualifier())?;
                        record.fields.extend(row[index].iter().cloned());
                    }
                }
            }

            records.push(record);
        }

        Ok((columns, records))
    }

    /// Evaluates a condition; `NULL` counts as not satisfied.
    fn predicate(&self, expr: &Expr, env: &Env<'_>) -> Result<bool> {
        match self.expr(expr, env)? {
            Value::Bool(value) => Ok(value),
            Value::Null => Ok(false),
            value => Err(Error::invalid_statement(format!(
                "argument of WHERE must be type boolean, not {}",
                value.kind_name()
            ))),
        }
    }

    fn expr(&self, expr: &Expr, env: &Env<'_>) -> Result<Value> {
        match expr {
            Expr::And(and) => {
                let mut unknown = false;

                for operand in &and.operands {
                    match truth(self.expr(operand, env)?)? {
                        Some(false) => return Ok(Value::Bool(false)),
                        Some(true) => {}
                        None => unknown = true,
                    }
                }

                Ok(if unknown { Value::Null } else { Value::Bool(true) })
            }
            Expr::Or(or) => {
                let mut unknown = false;

                for operand in &or.operands {
                    match truth(self.expr(operand, env)?)? {
                        Some(true) => return Ok(Value::Bool(true)),
                        Some(false) => {}
                        None => unknown = true,
                    }
                }

                Ok(if unknown { Value::Null } else { Value::Bool(false) })
            }
            Expr::BinaryOp(binary_op) => {
                let lhs = self.expr(&binary_op.lhs, env)?;
                let rhs = self.expr(&binary_op.rhs, env)?;

                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Null);
                }

                let ordering = lhs.sql_cmp(&rhs).ok_or_else(|| {
                    Error::invalid_statement(format!(
                        "operator does not exist: {} {} {}",
                        lhs.kind_name(),
                        binary_op.op,
                        rhs.kind_name()
                    ))
                })?;

                Ok(Value::Bool(match binary_op.op {
                    BinaryOp::Eq => ordering.is_eq(),
                    BinaryOp::Ne => ordering.is_ne(),
                    BinaryOp::Ge => ordering.is_ge(),
                    BinaryOp::Gt => ordering.is_gt(),
                    BinaryOp::Le => ordering.is_le(),
                    BinaryOp::Lt => ordering.is_lt(),
                }))
            }
            Expr::Column(column) => env.lookup(column),
            Expr::Grouping(grouping) => self.expr(&grouping.expr, env),
            Expr::InList(in_list) => {
                let lhs = self.expr(&in_list.expr, env)?;

                if lhs.is_null() {
                    return Ok(if in_list.list.is_empty() {
                        Value::Bool(false)
                    } else {
                        Value::Null
                    });
                }

                let mut unknown = false;

                for item in &in_list.list {
                    let item = self.expr(item, env)?;

                    if item.is_null() {
                        unknown = true;
                    } else if lhs.sql_cmp(&item).is_some_and(Ordering::is_eq) {
                        return Ok(Value::Bool(true));
                    }
                }

                Ok(if unknown { Value::Null } else { Value::Bool(false) })
            }
            Expr::IsNull(is_null) => {
                let value = self.expr(&is_null.expr, env)?;
                Ok(Value::Bool(value.is_null() != is_null.negate))
            }
            Expr::Not(not) => Ok(match truth(self.expr(&not.expr, env)?)? {
                Some(value) => Value::Bool(!value),
                None => Value::Null,
            }),
            Expr::Value(value) => Ok(value.clone()),
        }
    }
}

impl<'a> Env<'a> {
    fn new(shapes: &'a [Shape], row: &'a [Vec<Value>], outer: Option<&'a Env<'a>>) -> Self {
        Self { shapes, row, outer }
    }

    fn lookup(&self, column: &ExprColumn) -> Result<Value> {
        let qualifier = column.table.qualifier();
        let mut env = Some(self);

        while let Some(current) = env {
            if let Some(index) = current
                .shapes
                .iter()
                .position(|shape| shape.qualifier == qualifier)
            {
                let shape = &current.shapes[index];

                let Some(position) = shape.columns.iter().position(|name| *name == column.column)
                else {
                    return Err(Error::invalid_statement(format!(
                        "column \"{qualifier}\".\"{}\" does not exist",
                        column.column
                    )));
                };

                // Rows are absent when only the shape is being computed
                return Ok(current
                    .row
                    .get(index)
                    .and_then(|values| values.get(position))
                    .cloned()
                    .unwrap_or_default());
            }

            env = current.outer;
        }

        Err(Error::invalid_statement(format!(
            "missing FROM-clause entry for table \"{qualifier}\""
        )))
    }
}

fn shape_index(shapes: &[Shape], qualifier: &str) -> Result<usize> {
    shapes
        .iter()
        .position(|shape| shape.qualifier == qualifier)
        .ok_or_else(|| {
            Error::invalid_statement(format!(
                "missing FROM-clause entry for table \"{qualifier}\""
            ))
        })
}

/// Boolean interpretation of a condition's value; `None` is unknown.
fn truth(value: Value) -> Result<Option<bool>> {
    match value {
        Value::Bool(value) => Ok(Some(value)),
        Value::Null => Ok(None),
        value => Err(Error::invalid_statement(format!(
            "argument of AND/OR/NOT must be type boolean, not {}",
            value.kind_name()
        ))),
    }
}

/// Orders two sort keys the way PostgreSQL does by default: `NULL` sorts
/// after every value, so it comes last ascending and first descending.
fn compare(a: &Value, b: &Value, direction: Option<Direction>) -> Ordering {
    let ordering = match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.sql_cmp(b).unwrap_or(Ordering::Equal),
    };

    match direction {
        Some(Direction::Desc) => ordering.reverse(),
        Some(Direction::Asc) | None => ordering,
    }
}
