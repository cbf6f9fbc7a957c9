//! Correlates a child relation with its parent through `JOIN LATERAL`, so
//! the first rows per parent come back from a single statement.

use crate::{schema::Model, Relation};

use lateral_core::stmt::{Expr, Join, JoinOp, SelectItem, TableFactor, TableRef};
use tracing::trace;

use std::sync::Arc;

/// Name of the lateral subquery inside the derived table.
pub const LATERAL_TABLE: &str = "lateral_table";

/// How a child row points back at its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapping {
    /// Key column on the parent table
    pub primary_key: String,

    /// Column on the child table holding the parent's key
    pub foreign_key: String,

    /// Name the parent key is exposed under next to the child's columns.
    /// Must not collide with a child column; this is not checked.
    pub foreign_key_alias: String,
}

impl KeyMapping {
    /// A mapping using the default `{foreign_key}_alias` alias.
    pub fn new(primary_key: impl Into<String>, foreign_key: impl Into<String>) -> Self {
        let foreign_key = foreign_key.into();

        Self {
            primary_key: primary_key.into(),
            foreign_key_alias: format!("{foreign_key}_alias"),
            foreign_key,
        }
    }
}

/// Wraps `child` so that every parent row evaluates it laterally.
///
/// The result is a relation on the child model rooted at
///
/// ```sql
/// (SELECT "parent"."pk" AS fk_alias, "lateral_table".*
///  FROM "parent"
///  INNER JOIN LATERAL (<child> AND "child"."fk" = "parent"."pk" [LIMIT n]) lateral_table ON TRUE
/// ) child
/// ```
///
/// The derived table takes the child's physical table name, so its columns
/// are addressed as `"child".*`. Restricting the result to a batch of
/// parents is up to the caller (filter on the alias column); nothing here
/// adds one.
///
/// When parent and child share a table, `child` must already be aliased
/// with [`alias_table`](crate::alias_table) or the correlation is
/// ambiguous.
pub fn build_scope(
    parent: &Arc<Model>,
    child: &Relation,
    keys: &KeyMapping,
    limit: Option<u64>,
) -> Relation {
    let lateral_table = TableRef::derived(LATERAL_TABLE);
    let outer = Relation::new(parent.clone()).unscope_select();
    let parent_key = outer.column(&keys.primary_key);

    let mut inner = child
        .clone()
        .filter(Expr::eq(child.column(&keys.foreign_key), parent_key.clone()));

    if let Some(limit) = limit {
        inner = inner.limit(limit);
    }

    let outer = outer
        .select([
            SelectItem::alias(parent_key, &keys.foreign_key_alias),
            SelectItem::Wildcard(lateral_table),
        ])
        .join(Join {
            relation: TableFactor::lateral(inner.to_query(), LATERAL_TABLE),
            constraint: JoinOp::Inner(Expr::from(true)),
        });

    let child_model = child.model();
    let derived_name = child.table().name().to_string();

    let scope = Relation::new(child_model.clone()).from_derived(outer.to_query(), derived_name);

    let scope = if child_model.has_ignored_columns() {
        let mut items = vec![SelectItem::from(scope.column(&keys.foreign_key_alias))];
        items.extend(
            child_model
                .active_columns()
                .map(|column| SelectItem::from(scope.column(&column.name))),
        );
        scope.select(items)
    } else {
        scope
    };

    trace!(
        parent = %parent.name,
        child = %child_model.name,
        ?limit,
        "built lateral scope"
    );

    scope
}
