use super::ExprColumn;

/// Names a relation that columns can be qualified by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
    /// A table from the schema, optionally aliased in `FROM`.
    Table { name: String, alias: Option<String> },

    /// The name given to a derived table (`(SELECT ...) name`).
    Derived { name: String },
}

impl TableRef {
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn derived(name: impl Into<String>) -> Self {
        Self::Derived { name: name.into() }
    }

    /// The physical table name, or the derived table's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Table { name, .. } | Self::Derived { name } => name,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Table { alias, .. } => alias.as_deref(),
            Self::Derived { .. } => None,
        }
    }

    /// The name columns are qualified with in SQL: the alias if there is one.
    pub fn qualifier(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived { .. })
    }

    /// True when both refer to the same underlying table, ignoring aliases.
    pub fn is_same_table(&self, other: &TableRef) -> bool {
        match (self, other) {
            (Self::Table { name: a, .. }, Self::Table { name: b, .. }) => a == b,
            (Self::Derived { name: a }, Self::Derived { name: b }) => a == b,
            _ => false,
        }
    }

    pub fn column(&self, name: impl Into<String>) -> ExprColumn {
        ExprColumn::new(self.clone(), name)
    }
}
