mod association;
pub use association::{Association, AssociationKind, AssociationOptions, Scope};

mod builder;
pub use builder::{Builder, ModelBuilder, TableBuilder};

mod model;
pub use model::{Model, ModelId};

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;
pub use lateral_core::schema::db::{self, Type};

use std::sync::Arc;

/// Tables plus the models (and their associations) that read them.
#[derive(Debug)]
pub struct Schema {
    /// Database-level schema
    pub db: Arc<db::Schema>,

    models: IndexMap<String, Arc<Model>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Result<&Arc<Model>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::invalid_schema(format!("unknown model `{name}`")))
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Arc<Model>> + '_ {
        self.models.values()
    }
}
