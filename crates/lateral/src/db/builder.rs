use super::{connect, Db};
use crate::{driver::Driver, Result, Schema};

use lateral_core::bail;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    schema: Option<Schema>,
}

impl Builder {
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    /// Connects with the driver the URL's scheme selects.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = connect::connect(url).await?;
        self.build_with(driver)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_with(Arc::new(driver))
    }

    fn build_with(&mut self, driver: Arc<dyn Driver>) -> Result<Db> {
        let Some(schema) = self.schema.take() else {
            bail!("no schema set on the database builder");
        };

        Ok(Db {
            schema: Arc::new(schema),
            driver,
        })
    }
}
