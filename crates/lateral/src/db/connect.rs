use crate::{driver::Driver, Error, Result};

use url::Url;

use std::sync::Arc;

/// Picks a driver by URL scheme: `postgresql://` (or `postgres://`) and
/// `memory:`. Each needs its cargo feature.
pub(super) async fn connect(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(url).await,
        "memory" => connect_memory(),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported scheme `{scheme}`; url={url}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &str) -> Result<Arc<dyn Driver>> {
    let driver = lateral_driver_postgresql::PostgreSQL::connect(url).await?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::unsupported_feature("`postgresql` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory() -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(lateral_driver_memory::Memory::new()))
}

#[cfg(not(feature = "memory"))]
fn connect_memory() -> Result<Arc<dyn Driver>> {
    Err(Error::unsupported_feature("`memory` feature not enabled"))
}
