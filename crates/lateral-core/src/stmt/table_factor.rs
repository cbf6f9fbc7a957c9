use super::{Query, TableRef};

/// A relation that can appear in `FROM` or on the right side of a join.
#[derive(Debug, Clone, PartialEq)]
pub enum TableFactor {
    /// A schema table, possibly aliased
    Table(TableRef),

    /// `[LATERAL] (subquery) alias`
    Derived {
        lateral: bool,
        subquery: Box<Query>,
        alias: String,
    },
}

impl TableFactor {
    pub fn derived(subquery: Query, alias: impl Into<String>) -> Self {
        Self::Derived {
            lateral: false,
            subquery: Box::new(subquery),
            alias: alias.into(),
        }
    }

    pub fn lateral(subquery: Query, alias: impl Into<String>) -> Self {
        Self::Derived {
            lateral: true,
            subquery: Box::new(subquery),
            alias: alias.into(),
        }
    }

    /// The reference columns of this relation are qualified with.
    pub fn table_ref(&self) -> TableRef {
        match self {
            Self::Table(table_ref) => table_ref.clone(),
            Self::Derived { alias, .. } => TableRef::derived(alias.clone()),
        }
    }
}

impl From<TableRef> for TableFactor {
    fn from(value: TableRef) -> Self {
        Self::Table(value)
    }
}
