use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::{Company, CompanyImage, Event, JobListing};
use crate::schema::{companies, company_images, events, job_listings};

#[tracing::instrument(level = "debug", skip_all)]
pub async fn all(connection: &mut AsyncPgConnection) -> Result<Vec<Company>, DatabaseError> {
    Ok(companies::table
        .select(Company::as_select())
        .order(companies::company_id)
        .load(connection)
        .await?)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn with_events(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<(Company, Vec<Event>)>, DatabaseError> {
    let companies = all(connection).await?;
    let events = Event::belonging_to(&companies)
        .select(Event::as_select())
        .order((events::event_start, events::event_id))
        .load(connection)
        .await?;
    let grouped = events.grouped_by(&companies);
    Ok(companies.into_iter().zip(grouped).collect())
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn with_job_listings(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<(Company, Vec<JobListing>)>, DatabaseError> {
    let companies = all(connection).await?;
    let listings = JobListing::belonging_to(&companies)
        .select(JobListing::as_select())
        .order((job_listings::deadline, job_listings::listing_id))
        .load(connection)
        .await?;
    let grouped = listings.grouped_by(&companies);
    Ok(companies.into_iter().zip(grouped).collect())
}

/// Companies that have an uploaded image, resolved through the
/// `company_images` view.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn images(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<CompanyImage>, DatabaseError> {
    Ok(company_images::table
        .select(CompanyImage::as_select())
        .order(company_images::company_id)
        .load(connection)
        .await?)
}
