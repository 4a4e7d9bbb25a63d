use bifrost_database::models::{JobListing, JobListingContact};
use serde::Serialize;
use tracing::warn;

use crate::error::{fetch_failed, QueryError};
use crate::services::Services;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListingDetails {
    #[serde(flatten)]
    pub listing: JobListing,
    pub contacts: Vec<JobListingContact>,
}

impl Services {
    #[tracing::instrument(skip(self))]
    pub async fn get_all_job_listings(&self) -> Result<Vec<JobListing>, QueryError> {
        self.store
            .job_listings()
            .await
            .map_err(|error| fetch_failed("job listings", error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_job_listing_by_id(
        &self,
        listing_id: i32,
    ) -> Result<JobListingDetails, QueryError> {
        let (listing, contacts) = self
            .store
            .job_listing_with_contacts(listing_id)
            .await
            .map_err(|error| fetch_failed("job listing", error))?
            .ok_or_else(|| {
                warn!(listing_id, "job listing not found");
                QueryError::NotFound {
                    entity: "job listing",
                    id: listing_id,
                }
            })?;
        Ok(JobListingDetails { listing, contacts })
    }
}
