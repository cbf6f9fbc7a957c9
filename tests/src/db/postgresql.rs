use lateral::{
    driver::{Capability, Driver},
    Result,
};
use lateral_driver_postgresql::PostgreSQL;

use crate::Setup;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Every test resets the same tables, so they run one at a time.
static LOCK: Mutex<()> = Mutex::new(());

#[derive(Debug, Default)]
pub struct SetupPostgreSQL;

impl SetupPostgreSQL {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Setup for SetupPostgreSQL {
    async fn connect(&self) -> Result<Box<dyn Driver>> {
        let url = std::env::var("LATERAL_TEST_POSTGRES_URL")
            .unwrap_or_else(|_| "postgresql://localhost:5432/lateral_test".to_string());

        Ok(Box::new(PostgreSQL::connect(&url).await?))
    }

    fn capability(&self) -> &Capability {
        &Capability::POSTGRESQL
    }

    fn lock(&self) -> Option<MutexGuard<'static, ()>> {
        // A failed test poisons the lock but leaves nothing behind to clean up
        Some(LOCK.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
