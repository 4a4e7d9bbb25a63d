//! Lookups against the external identity provider. This crate only reads
//! profiles, user ids are owned by the provider.

mod directory;
pub mod error;

use async_trait::async_trait;
pub use directory::DirectoryClient;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::IdentityError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserProfile {
    /// First and last name joined by a space, `None` if both are missing or blank.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let full_name = full_name.trim();
        (!full_name.is_empty()).then(|| full_name.to_owned())
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` when the provider does not know the user.
    async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, IdentityError>;

    /// Resolves a set of ids at once. The result has one entry per requested id
    /// in the same order; an id that cannot be resolved yields `None` instead of
    /// failing the others.
    async fn get_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<Option<UserProfile>>, IdentityError> {
        let lookups = user_ids.iter().map(|user_id| async move {
            match self.get_user(user_id).await {
                Ok(profile) => profile,
                Err(error) => {
                    warn!(%user_id, %error, "identity lookup failed");
                    None
                }
            }
        });
        Ok(join_all(lookups).await)
    }
}
