use bifrost_database::models::{Company, CompanyImage, Event, JobListing};
use serde::Serialize;

use crate::error::{fetch_failed, QueryError};
use crate::services::Services;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyWithEvents {
    #[serde(flatten)]
    pub company: Company,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyWithJobListings {
    #[serde(flatten)]
    pub company: Company,
    pub job_listings: Vec<JobListing>,
}

impl Services {
    #[tracing::instrument(skip(self))]
    pub async fn get_all_companies(&self) -> Result<Vec<Company>, QueryError> {
        self.store
            .companies()
            .await
            .map_err(|error| fetch_failed("companies", error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_companies_with_events(&self) -> Result<Vec<CompanyWithEvents>, QueryError> {
        let companies = self
            .store
            .companies_with_events()
            .await
            .map_err(|error| fetch_failed("companies", error))?;
        Ok(companies
            .into_iter()
            .map(|(company, events)| CompanyWithEvents { company, events })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_companies_with_job_listings(
        &self,
    ) -> Result<Vec<CompanyWithJobListings>, QueryError> {
        let companies = self
            .store
            .companies_with_job_listings()
            .await
            .map_err(|error| fetch_failed("companies", error))?;
        Ok(companies
            .into_iter()
            .map(|(company, job_listings)| CompanyWithJobListings {
                company,
                job_listings,
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_company_images(&self) -> Result<Vec<CompanyImage>, QueryError> {
        self.store
            .company_images()
            .await
            .map_err(|error| fetch_failed("company images", error))
    }
}
