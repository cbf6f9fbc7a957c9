use crate::{ExecLog, LoggingDriver, Setup};

use lateral::{driver::Capability, Db, Schema};
use tracing_subscriber::EnvFilter;

use std::{future::Future, pin::Pin};

/// Per-test harness: owns the driver setup and the log of executed
/// operations.
pub struct DbTest {
    setup: Box<dyn Setup>,
    log: ExecLog,
}

impl DbTest {
    /// Runs `test_fn` to completion on a current-thread runtime.
    pub fn run<S, F>(setup: S, test_fn: F)
    where
        S: Setup,
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        init_tracing();

        let _guard = setup.lock();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to create Tokio runtime");

        let mut test = DbTest {
            setup: Box::new(setup),
            log: ExecLog::default(),
        };

        runtime.block_on(test_fn(&mut test));
    }

    /// Connects, resets the tables of `schema` and starts logging.
    pub async fn try_setup_db(&mut self, schema: Schema) -> lateral::Result<Db> {
        let driver = LoggingDriver::new(self.setup.connect().await?);
        self.log = driver.exec_log();

        let db = Db::builder().schema(schema).build(driver)?;
        db.reset_db().await?;

        Ok(db)
    }

    pub async fn setup_db(&mut self, schema: Schema) -> Db {
        self.try_setup_db(schema).await.unwrap()
    }

    pub fn log(&self) -> &ExecLog {
        &self.log
    }

    pub fn capability(&self) -> &Capability {
        self.setup.capability()
    }
}

fn init_tracing() {
    // Several tests share the process; only the first install wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
