use crate::ExecLog;

use lateral::driver::{Capability, Driver, Operation, Response};
use lateral_core::{async_trait, schema::db::Schema, Result};

use std::sync::{Arc, Mutex};

/// Wraps a driver and records every operation executed through it.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with the [`ExecLog`] handles given out to tests
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl LoggingDriver {
    pub fn new(inner: Box<dyn Driver>) -> Self {
        Self {
            inner,
            ops: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.ops.clone())
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        self.ops
            .lock()
            .expect("failed to acquire ops log lock")
            .push(op.clone());

        self.inner.exec(schema, op).await
    }

    // Not logged; tests only care about what runs after setup
    async fn reset_db(&self, schema: &Schema) -> Result<()> {
        self.inner.reset_db(schema).await
    }
}
