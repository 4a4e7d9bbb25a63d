use async_trait::async_trait;
use bifrost_database::models::{
    Company, CompanyImage, CompanySummary, Event, EventOrganizer, JobListing, JobListingContact,
    Point, Registration, Resource, Student,
};
use bifrost_database::repos::{companies, events, job_listings, points, resources, students};
use bifrost_database::{DatabaseError, Pool};

/// The reads the query layer needs from the relational store.
#[async_trait]
pub trait Store: Send + Sync {
    async fn companies(&self) -> Result<Vec<Company>, DatabaseError>;

    async fn companies_with_events(&self) -> Result<Vec<(Company, Vec<Event>)>, DatabaseError>;

    async fn companies_with_job_listings(
        &self,
    ) -> Result<Vec<(Company, Vec<JobListing>)>, DatabaseError>;

    async fn company_images(&self) -> Result<Vec<CompanyImage>, DatabaseError>;

    async fn events(&self) -> Result<Vec<Event>, DatabaseError>;

    async fn event_with_company(
        &self,
        event_id: i32,
    ) -> Result<Option<(Event, CompanySummary)>, DatabaseError>;

    async fn event_organizers(&self, event_id: i32) -> Result<Vec<EventOrganizer>, DatabaseError>;

    async fn event_registrations(&self, event_id: i32) -> Result<Vec<Registration>, DatabaseError>;

    async fn job_listings(&self) -> Result<Vec<JobListing>, DatabaseError>;

    async fn job_listing_with_contacts(
        &self,
        listing_id: i32,
    ) -> Result<Option<(JobListing, Vec<JobListingContact>)>, DatabaseError>;

    async fn points_for_user(&self, user_id: &str) -> Result<Vec<Point>, DatabaseError>;

    async fn total_points_for_user(&self, user_id: &str) -> Result<i64, DatabaseError>;

    async fn student(&self, user_id: &str) -> Result<Option<Student>, DatabaseError>;

    async fn published_resources(&self) -> Result<Vec<Resource>, DatabaseError>;
}

/// [`Store`] backed by the PostgreSQL pool. Every call checks out its own
/// connection.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    #[must_use]
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        companies::all(&mut connection).await
    }

    async fn companies_with_events(&self) -> Result<Vec<(Company, Vec<Event>)>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        companies::with_events(&mut connection).await
    }

    async fn companies_with_job_listings(
        &self,
    ) -> Result<Vec<(Company, Vec<JobListing>)>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        companies::with_job_listings(&mut connection).await
    }

    async fn company_images(&self) -> Result<Vec<CompanyImage>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        companies::images(&mut connection).await
    }

    async fn events(&self) -> Result<Vec<Event>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        events::all(&mut connection).await
    }

    async fn event_with_company(
        &self,
        event_id: i32,
    ) -> Result<Option<(Event, CompanySummary)>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        events::with_company(&mut connection, event_id).await
    }

    async fn event_organizers(&self, event_id: i32) -> Result<Vec<EventOrganizer>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        events::organizers(&mut connection, event_id).await
    }

    async fn event_registrations(&self, event_id: i32) -> Result<Vec<Registration>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        events::registrations(&mut connection, event_id).await
    }

    async fn job_listings(&self) -> Result<Vec<JobListing>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        job_listings::all(&mut connection).await
    }

    async fn job_listing_with_contacts(
        &self,
        listing_id: i32,
    ) -> Result<Option<(JobListing, Vec<JobListingContact>)>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        job_listings::with_contacts(&mut connection, listing_id).await
    }

    async fn points_for_user(&self, user_id: &str) -> Result<Vec<Point>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        points::for_user(&mut connection, user_id).await
    }

    async fn total_points_for_user(&self, user_id: &str) -> Result<i64, DatabaseError> {
        let mut connection = self.pool.get().await?;
        points::total_for_user(&mut connection, user_id).await
    }

    async fn student(&self, user_id: &str) -> Result<Option<Student>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        students::find(&mut connection, user_id).await
    }

    async fn published_resources(&self) -> Result<Vec<Resource>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        resources::published(&mut connection).await
    }
}
