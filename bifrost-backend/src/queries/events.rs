use bifrost_database::models::{
    CompanySummary, Event, EventOrganizer, OrganizerRole, Registration,
};
use bifrost_identity::UserProfile;
use futures_util::future::try_join_all;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::{fetch_failed, QueryError};
use crate::services::Services;

/// Shown for organizers the identity provider has no name for.
pub const UNKNOWN_ORGANIZER_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub role: OrganizerRole,
}

impl Organizer {
    fn new(organizer: EventOrganizer, profile: Option<&UserProfile>) -> Self {
        Self {
            name: profile
                .and_then(UserProfile::full_name)
                .unwrap_or_else(|| UNKNOWN_ORGANIZER_NAME.to_owned()),
            id: organizer.user_id,
            role: organizer.role,
        }
    }
}

/// An event with its owning company and named organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "companies")]
    pub company: CompanySummary,
    pub organizers: Vec<Organizer>,
}

impl Services {
    #[tracing::instrument(skip(self))]
    pub async fn get_all_events(&self) -> Result<Vec<Event>, QueryError> {
        self.store
            .events()
            .await
            .map_err(|error| fetch_failed("events", error))
    }

    /// Resolves every organizer with its own concurrent lookup. The first
    /// failing lookup fails the whole call.
    #[tracing::instrument(skip(self))]
    pub async fn get_event_by_id(&self, event_id: i32) -> Result<EventDetails, QueryError> {
        let (event, company) = self.event_with_company(event_id).await?;
        let organizers = self.event_organizers(event_id).await?;

        let organizers =
            try_join_all(organizers.into_iter().map(|organizer| self.resolve_organizer(organizer)))
                .await?;

        Ok(EventDetails {
            event,
            company,
            organizers,
        })
    }

    /// Like [`Self::get_event_by_id`] but resolves all organizers with one
    /// batch lookup, an organizer that cannot be resolved is named
    /// [`UNKNOWN_ORGANIZER_NAME`].
    #[tracing::instrument(skip(self))]
    pub async fn get_event_by_id_lenient(&self, event_id: i32) -> Result<EventDetails, QueryError> {
        let (event, company) = self.event_with_company(event_id).await?;
        let organizers = self.event_organizers(event_id).await?;

        let profiles = if organizers.is_empty() {
            Vec::new()
        } else {
            let user_ids: Vec<String> = organizers
                .iter()
                .map(|organizer| organizer.user_id.clone())
                .collect();
            self.identity.get_users(&user_ids).await.map_err(|error| {
                error!(%error, "Failed to resolve organizers");
                QueryError::IdentityBatch(error)
            })?
        };

        let mut profiles = profiles.into_iter();
        let organizers = organizers
            .into_iter()
            .map(|organizer| Organizer::new(organizer, profiles.next().flatten().as_ref()))
            .collect();

        Ok(EventDetails {
            event,
            company,
            organizers,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_event_registrations(
        &self,
        event_id: i32,
    ) -> Result<Vec<Registration>, QueryError> {
        self.store
            .event_registrations(event_id)
            .await
            .map_err(|error| fetch_failed("registrations", error))
    }

    async fn event_with_company(
        &self,
        event_id: i32,
    ) -> Result<(Event, CompanySummary), QueryError> {
        self.store
            .event_with_company(event_id)
            .await
            .map_err(|error| fetch_failed("event", error))?
            .ok_or_else(|| {
                warn!(event_id, "event not found");
                QueryError::NotFound {
                    entity: "event",
                    id: event_id,
                }
            })
    }

    async fn event_organizers(&self, event_id: i32) -> Result<Vec<EventOrganizer>, QueryError> {
        self.store
            .event_organizers(event_id)
            .await
            .map_err(|error| fetch_failed("organizers", error))
    }

    async fn resolve_organizer(&self, organizer: EventOrganizer) -> Result<Organizer, QueryError> {
        match self.identity.get_user(&organizer.user_id).await {
            Ok(profile) => Ok(Organizer::new(organizer, profile.as_ref())),
            Err(error) => {
                error!(user_id = %organizer.user_id, %error, "Failed to resolve organizer");
                Err(QueryError::Identity {
                    user_id: organizer.user_id,
                    source: error,
                })
            }
        }
    }
}
