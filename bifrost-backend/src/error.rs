use bifrost_config::ConfigError;
use bifrost_database::DatabaseError;
use bifrost_identity::error::IdentityError;
use tracing::error;

/// Failure while wiring up the shared clients.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("identity provider error: {0}")]
    Identity(#[from] IdentityError),
}

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Failed to fetch {what}")]
    Fetch {
        what: &'static str,
        source: DatabaseError,
    },
    #[error("Failed to resolve user {user_id}")]
    Identity {
        user_id: String,
        source: IdentityError,
    },
    #[error("Failed to resolve organizers")]
    IdentityBatch(#[source] IdentityError),
}

impl QueryError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Logs the original error and replaces it by one with a fixed message.
pub(crate) fn fetch_failed(what: &'static str, source: DatabaseError) -> QueryError {
    error!(error = %source, "Failed to fetch {what}");
    QueryError::Fetch { what, source }
}
