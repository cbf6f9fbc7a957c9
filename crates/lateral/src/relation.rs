use crate::schema::Model;

use lateral_core::stmt::{
    self, Expr, ExprColumn, Join, Limit, OrderBy, OrderByExpr, Query, Select, SelectItem,
    TableFactor, TableRef, TableWithJoins, Value,
};
use lateral_sql::Serializer;

use std::sync::Arc;

/// A `SELECT` over a model, built up one clause at a time.
///
/// Every method consumes the relation and returns a new one, so a relation
/// can be cloned and refined along different paths without the branches
/// affecting each other. Column references are qualified by the relation's
/// root [`TableRef`], which is what [`alias_table`](crate::alias_table)
/// rebinds.
#[derive(Debug, Clone)]
pub struct Relation {
    model: Arc<Model>,

    /// Qualifier for the relation's own columns.
    table: TableRef,

    /// `FROM` override. When `None`, the relation selects from `table`.
    from: Option<TableFactor>,

    joins: Vec<Join>,

    /// Explicit projection. Empty selects the model's default columns.
    select: Vec<SelectItem>,

    filter: Option<Expr>,

    order_by: Vec<OrderByExpr>,

    limit: Option<u64>,
}

impl Relation {
    pub fn new(model: Arc<Model>) -> Self {
        let table = model.table_ref();

        Self {
            model,
            table,
            from: None,
            joins: vec![],
            select: vec![],
            filter: None,
            order_by: vec![],
            limit: None,
        }
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// The table reference columns of this relation are qualified by.
    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// A column of the relation's root table.
    pub fn column(&self, name: impl Into<String>) -> ExprColumn {
        self.table.column(name)
    }

    pub fn predicate(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    pub fn order(&self) -> &[OrderByExpr] {
        &self.order_by
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn selection(&self) -> &[SelectItem] {
        &self.select
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// ANDs `expr` onto the predicate.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        let expr = expr.into();

        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, expr),
            None => expr,
        });
        self
    }

    /// ORs `expr` with the whole current predicate, parenthesizing the result.
    pub fn or(mut self, expr: impl Into<Expr>) -> Self {
        let expr = expr.into();

        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::grouping(Expr::or(existing, expr)),
            None => expr,
        });
        self
    }

    pub fn where_eq(self, column: &str, value: impl Into<Value>) -> Self {
        let column = self.column(column);
        let value: Value = value.into();

        if value.is_null() {
            self.filter(Expr::is_null(column))
        } else {
            self.filter(Expr::eq(column, value))
        }
    }

    pub fn where_in<T>(self, column: &str, values: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        let column = self.column(column);
        let list = values.into_iter().map(|value| Expr::Value(value.into()));
        self.filter(Expr::in_list(column, list))
    }

    pub fn where_gt(self, column: &str, value: impl Into<Value>) -> Self {
        let column = self.column(column);
        let value: Value = value.into();
        self.filter(Expr::gt(column, value))
    }

    pub fn where_lt(self, column: &str, value: impl Into<Value>) -> Self {
        let column = self.column(column);
        let value: Value = value.into();
        self.filter(Expr::lt(column, value))
    }

    pub fn where_null(self, column: &str) -> Self {
        let column = self.column(column);
        self.filter(Expr::is_null(column))
    }

    pub fn where_not_null(self, column: &str) -> Self {
        let column = self.column(column);
        self.filter(Expr::is_not_null(column))
    }

    pub fn order_by(mut self, expr: OrderByExpr) -> Self {
        self.order_by.push(expr);
        self
    }

    pub fn order_by_asc(self, column: &str) -> Self {
        let column = self.column(column);
        self.order_by(OrderByExpr::asc(column))
    }

    pub fn order_by_desc(self, column: &str) -> Self {
        let column = self.column(column);
        self.order_by(OrderByExpr::desc(column))
    }

    /// Bounds the number of rows. Limits above `i64::MAX` render as
    /// `i64::MAX`.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Replaces the projection.
    pub fn select<I>(mut self, items: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<SelectItem>,
    {
        self.select = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Roots the relation at `(query) name`. Columns are then qualified by
    /// the derived table's name.
    pub fn from_derived(mut self, query: Query, name: impl Into<String>) -> Self {
        let name = name.into();

        self.table = TableRef::derived(name.clone());
        self.from = Some(TableFactor::derived(query, name));
        self
    }

    /// Roots the relation at a (possibly aliased) schema table.
    pub fn with_table(mut self, table: TableRef) -> Self {
        self.table = table;
        self.from = None;
        self
    }

    pub fn unscope_select(mut self) -> Self {
        self.select.clear();
        self
    }

    pub fn unscope_where(mut self) -> Self {
        self.filter = None;
        self
    }

    pub fn unscope_order(mut self) -> Self {
        self.order_by.clear();
        self
    }

    pub fn unscope_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    /// The projection used when nothing was selected explicitly: every
    /// column as `"table".*`, or the model's active columns one by one when
    /// some are ignored.
    pub fn default_projection(&self) -> Vec<SelectItem> {
        if self.model.has_ignored_columns() {
            self.model
                .active_columns()
                .map(|column| self.column(&column.name).into())
                .collect()
        } else {
            vec![SelectItem::Wildcard(self.table.clone())]
        }
    }

    pub fn to_query(&self) -> Query {
        let returning = if self.select.is_empty() {
            self.default_projection()
        } else {
            self.select.clone()
        };

        let relation = self
            .from
            .clone()
            .unwrap_or_else(|| TableFactor::Table(self.table.clone()));

        let mut select = Select::new(
            TableWithJoins {
                relation,
                joins: self.joins.clone(),
            },
            returning,
        );
        select.filter = self.filter.clone().into();

        let mut query = Query::new(select);

        if !self.order_by.is_empty() {
            query.order_by = Some(OrderBy::from(self.order_by.clone()));
        }

        query.limit = self.limit.map(Limit::new);
        query
    }

    /// Renders the relation as PostgreSQL with literal values inlined.
    pub fn to_sql(&self) -> String {
        Serializer::postgresql().serialize_inline(&self.to_query().into())
    }

    /// Renders the relation as PostgreSQL with `$n` placeholders, returning
    /// the bound values alongside.
    pub fn to_sql_with_params(&self) -> (String, Vec<Value>) {
        let mut params = vec![];
        let sql = Serializer::postgresql().serialize(&self.to_query().into(), &mut params);
        (sql, params)
    }
}

impl From<&Relation> for stmt::Statement {
    fn from(value: &Relation) -> Self {
        stmt::Statement::Query(value.to_query())
    }
}
