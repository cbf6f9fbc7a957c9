use lateral::driver::Operation;
use lateral_core::stmt::{Statement, Value};
use lateral_sql::Serializer;

use std::sync::{Arc, Mutex};

/// Read access to the operations a [`LoggingDriver`](crate::LoggingDriver)
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<Operation>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forgets everything logged so far, e.g. fixture inserts.
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.stmt().clone())
            .collect()
    }

    /// Number of `SELECT` statements executed.
    pub fn query_count(&self) -> usize {
        self.statements()
            .iter()
            .filter(|stmt| stmt.is_query())
            .count()
    }

    /// `SELECT` statements as PostgreSQL with `$n` placeholders, with the
    /// values each one was bound to.
    pub fn queries(&self) -> Vec<(String, Vec<Value>)> {
        self.statements()
            .into_iter()
            .filter(Statement::is_query)
            .map(|stmt| {
                let mut params = Vec::<Value>::new();
                let sql = Serializer::postgresql().serialize(&stmt.into(), &mut params);
                (sql, params)
            })
            .collect()
    }

    /// `SELECT` statements that join laterally.
    pub fn lateral_queries(&self) -> Vec<(String, Vec<Value>)> {
        self.queries()
            .into_iter()
            .filter(|(sql, _)| sql.contains("JOIN LATERAL"))
            .collect()
    }
}
