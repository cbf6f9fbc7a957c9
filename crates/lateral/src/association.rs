//! Wires registered associations to lateral scopes.

use crate::{
    alias_table, build_scope,
    schema::{Association, Model, Schema},
    Relation, Result,
};

use lateral_core::stmt::Value;

use std::sync::Arc;

/// Builds the relation loading `association` for any batch of `owner` rows.
///
/// The target's base relation is refined by the association's scope. When
/// owner and target live in the same table, the scoped relation is first
/// rebound to `"{table}__alias"` so the correlation predicate can tell the
/// two sides apart.
pub fn scope_for(schema: &Schema, owner: &Arc<Model>, association: &Association) -> Result<Relation> {
    let target = schema.model(&association.target)?;
    let mut child = (association.scope)(target.all());

    if target.table.name == owner.table.name {
        child = alias_table(&child, &format!("{}__alias", target.table.name));
    }

    Ok(build_scope(
        owner,
        &child,
        &association.key_mapping(),
        association.limit(),
    ))
}

/// The association restricted to a single owner.
pub fn scope_for_owner(
    schema: &Schema,
    owner: &Arc<Model>,
    association: &Association,
    key: Value,
) -> Result<Relation> {
    let scope = scope_for(schema, owner, association)?
        .where_eq(&association.foreign_key_alias, key);

    Ok(if association.is_one() {
        scope.limit(1)
    } else {
        scope
    })
}

/// The association restricted to a batch of owners.
pub fn scope_for_owners(
    schema: &Schema,
    owner: &Arc<Model>,
    association: &Association,
    keys: impl IntoIterator<Item = Value>,
) -> Result<Relation> {
    Ok(scope_for(schema, owner, association)?.where_in(&association.foreign_key_alias, keys))
}
