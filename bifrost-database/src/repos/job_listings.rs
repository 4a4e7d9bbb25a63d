use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::{JobListing, JobListingContact};
use crate::schema::{job_listing_contacts, job_listings};

#[tracing::instrument(level = "debug", skip_all)]
pub async fn all(connection: &mut AsyncPgConnection) -> Result<Vec<JobListing>, DatabaseError> {
    Ok(job_listings::table
        .select(JobListing::as_select())
        .order(job_listings::listing_id)
        .load(connection)
        .await?)
}

#[tracing::instrument(level = "debug", skip(connection))]
pub async fn with_contacts(
    connection: &mut AsyncPgConnection,
    listing_id: i32,
) -> Result<Option<(JobListing, Vec<JobListingContact>)>, DatabaseError> {
    let Some(listing) = job_listings::table
        .find(listing_id)
        .select(JobListing::as_select())
        .first(connection)
        .await
        .optional()?
    else {
        return Ok(None);
    };
    let contacts = JobListingContact::belonging_to(&listing)
        .select(JobListingContact::as_select())
        .order(job_listing_contacts::contact_id)
        .load(connection)
        .await?;
    Ok(Some((listing, contacts)))
}
