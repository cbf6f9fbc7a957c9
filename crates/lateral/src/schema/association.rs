use crate::{KeyMapping, Relation};

use std::{fmt, sync::Arc};

/// Refines the target model's relation: ordering, filters and, for
/// some-of-many, the per-parent limit.
pub type Scope = Arc<dyn Fn(Relation) -> Relation + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// At most one child per parent
    One,

    /// Every child the scope keeps, per parent
    Many,
}

/// A named association loaded through a lateral join.
#[derive(Clone)]
pub struct Association {
    pub name: String,
    pub kind: AssociationKind,

    /// Name of the target model
    pub target: String,

    pub scope: Scope,

    /// Key column on the owner
    pub primary_key: String,

    /// Column on the target referencing the owner's key
    pub foreign_key: String,

    /// Name the owner's key is re-exposed under in the derived table
    pub foreign_key_alias: String,
}

/// Optional overrides for the keys an association joins on.
#[derive(Debug, Clone, Default)]
pub struct AssociationOptions {
    pub primary_key: Option<String>,
    pub foreign_key: Option<String>,
    pub foreign_key_alias: Option<String>,
}

impl Association {
    /// Rows kept per parent inside the lateral subquery.
    pub fn limit(&self) -> Option<u64> {
        match self.kind {
            AssociationKind::One => Some(1),
            AssociationKind::Many => None,
        }
    }

    pub fn key_mapping(&self) -> KeyMapping {
        KeyMapping {
            primary_key: self.primary_key.clone(),
            foreign_key: self.foreign_key.clone(),
            foreign_key_alias: self.foreign_key_alias.clone(),
        }
    }

    pub fn is_one(&self) -> bool {
        self.kind == AssociationKind::One
    }
}

impl fmt::Debug for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("primary_key", &self.primary_key)
            .field("foreign_key", &self.foreign_key)
            .field("foreign_key_alias", &self.foreign_key_alias)
            .finish_non_exhaustive()
    }
}

impl AssociationOptions {
    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }

    pub fn foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    pub fn foreign_key_alias(mut self, foreign_key_alias: impl Into<String>) -> Self {
        self.foreign_key_alias = Some(foreign_key_alias.into());
        self
    }
}
