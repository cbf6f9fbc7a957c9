#[macro_use]
mod macros;

pub mod db;
mod db_test;
mod exec_log;
pub mod fixtures;
mod logging_driver;

pub use db_test::DbTest;
pub use exec_log::ExecLog;
pub use logging_driver::LoggingDriver;

use lateral::driver::{Capability, Driver};

use std::sync::MutexGuard;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Opens a fresh driver for one test.
    async fn connect(&self) -> lateral::Result<Box<dyn Driver>>;

    fn capability(&self) -> &Capability;

    /// Serializes tests that share external state, such as one database.
    fn lock(&self) -> Option<MutexGuard<'static, ()>> {
        None
    }
}
