#[derive(Debug)]
pub struct Capability {
    /// When true, the database uses a SQL-based query language.
    pub sql: bool,

    /// Supports `JOIN LATERAL` against a correlated subquery.
    pub lateral_join: bool,

    /// `INSERT ... RETURNING` is supported.
    pub returning_from_mutation: bool,
}

impl Capability {
    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        sql: true,
        lateral_join: true,
        returning_from_mutation: true,
    };

    /// Capabilities of the in-process evaluator. It consumes the statement
    /// AST directly and never sees SQL text.
    pub const MEMORY: Self = Self {
        sql: false,
        ..Self::POSTGRESQL
    };
}
