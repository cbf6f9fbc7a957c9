pub mod association;

pub mod db;
pub use db::Db;

mod record;
pub use record::{Loaded, Record};

mod relation;
pub use relation::Relation;

pub mod rewrite;
pub use rewrite::alias_table;

pub mod schema;
pub use schema::{AssociationOptions, Schema};

pub mod scope;
pub use scope::{build_scope, KeyMapping};

pub use lateral_core::{driver, stmt, Error, Result};
