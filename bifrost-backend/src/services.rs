use std::sync::Arc;

use bifrost_config::Config;
use bifrost_database::get_database_connection;
use bifrost_identity::{DirectoryClient, IdentityProvider};
use tracing::info;

use crate::error::AppError;
use crate::store::{PgStore, Store};

/// Shared clients every query runs against. Cloning is cheap.
#[derive(Clone)]
pub struct Services {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) identity: Arc<dyn IdentityProvider>,
}

impl Services {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let pool = get_database_connection(&config.database_url)?;
        let identity = DirectoryClient::from_config(&config.identity)?;
        info!(identity_api = %config.identity.api_url, "services ready");
        Ok(Self::new(Arc::new(PgStore::new(pool)), Arc::new(identity)))
    }

    /// Reads `bifrost.toml` and `BIFROST_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(&bifrost_config::get_config()?)
    }
}
