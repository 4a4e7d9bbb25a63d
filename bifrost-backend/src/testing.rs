//! In-memory stand-ins for the store and the identity provider.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bifrost_database::models::{
    Company, CompanyImage, CompanySummary, Event, EventOrganizer, JobListing, JobListingContact,
    OrganizerRole, Point, Registration, RegistrationStatus, Resource, Student,
};
use bifrost_database::DatabaseError;
use bifrost_identity::error::IdentityError;
use bifrost_identity::{IdentityProvider, UserProfile};
use chrono::{DateTime, Utc};
use tokio::sync::Barrier;

use crate::services::Services;

pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600 + seconds, 0).unwrap()
}

pub fn company(company_id: i32, company_name: &str) -> Company {
    Company {
        company_id,
        company_name: company_name.to_owned(),
        org_number: None,
        description: None,
        company_image: None,
        created_at: Some(at(0)),
        updated_at: Some(at(0)),
    }
}

pub fn event(event_id: i32, company_id: i32) -> Event {
    Event {
        event_id,
        title: format!("Event {event_id}"),
        teaser: None,
        description: None,
        event_start: at(86_400),
        registration_opens: at(3_600),
        participants_limit: 40,
        location: "Auditorium".to_owned(),
        food: "Pizza".to_owned(),
        language: "Norsk".to_owned(),
        age_restrictions: None,
        external_url: None,
        company_id,
        published: true,
        created_at: Some(at(0)),
        updated_at: Some(at(0)),
    }
}

pub fn job_listing(listing_id: i32, company_id: i32) -> JobListing {
    JobListing {
        listing_id,
        title: format!("Listing {listing_id}"),
        listing_type: "summer".to_owned(),
        teaser: "Join us".to_owned(),
        description: "Write Rust".to_owned(),
        application_url: "https://jobs.example/apply".to_owned(),
        published: true,
        company_id,
        deadline: at(604_800),
        created_at: Some(at(0)),
        updated_at: Some(at(0)),
    }
}

pub fn contact(contact_id: i32, listing_id: i32) -> JobListingContact {
    JobListingContact {
        contact_id,
        listing_id,
        name: "Recruiter".to_owned(),
        email: Some("jobs@example.com".to_owned()),
        phone: None,
        created_at: Some(at(0)),
        updated_at: Some(at(0)),
    }
}

pub fn organizer(event_id: i32, user_id: &str, role: OrganizerRole) -> EventOrganizer {
    EventOrganizer {
        event_id,
        user_id: user_id.to_owned(),
        role,
        created_at: Some(at(0)),
    }
}

pub fn registration(registration_id: i32, event_id: i32, user_id: &str) -> Registration {
    Registration {
        registration_id,
        event_id,
        user_id: user_id.to_owned(),
        note: None,
        status: RegistrationStatus::Registered,
        registration_time: Some(at(7_200)),
        attendance_status: None,
        attendance_time: None,
        created_at: Some(at(7_200)),
        updated_at: Some(at(7_200)),
    }
}

pub fn profile(id: &str, first_name: Option<&str>, last_name: Option<&str>) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        first_name: first_name.map(str::to_owned),
        last_name: last_name.map(str::to_owned),
        username: None,
    }
}

fn broken() -> DatabaseError {
    DatabaseError::DatabaseEnvUrl(std::env::VarError::NotPresent)
}

/// Rows kept in vectors. With `fail` set every read errors.
#[derive(Default)]
pub struct FakeStore {
    pub companies: Vec<Company>,
    pub events: Vec<Event>,
    pub organizers: Vec<EventOrganizer>,
    pub registrations: Vec<Registration>,
    pub job_listings: Vec<JobListing>,
    pub contacts: Vec<JobListingContact>,
    pub images: Vec<CompanyImage>,
    pub points: Vec<Point>,
    pub students: Vec<Student>,
    pub resources: Vec<Resource>,
    pub fail: bool,
}

impl FakeStore {
    fn check(&self) -> Result<(), DatabaseError> {
        if self.fail {
            Err(broken())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl crate::store::Store for FakeStore {
    async fn companies(&self) -> Result<Vec<Company>, DatabaseError> {
        self.check()?;
        Ok(self.companies.clone())
    }

    async fn companies_with_events(&self) -> Result<Vec<(Company, Vec<Event>)>, DatabaseError> {
        self.check()?;
        Ok(self
            .companies
            .iter()
            .map(|company| {
                let events = self
                    .events
                    .iter()
                    .filter(|event| event.company_id == company.company_id)
                    .cloned()
                    .collect();
                (company.clone(), events)
            })
            .collect())
    }

    async fn companies_with_job_listings(
        &self,
    ) -> Result<Vec<(Company, Vec<JobListing>)>, DatabaseError> {
        self.check()?;
        Ok(self
            .companies
            .iter()
            .map(|company| {
                let listings = self
                    .job_listings
                    .iter()
                    .filter(|listing| listing.company_id == company.company_id)
                    .cloned()
                    .collect();
                (company.clone(), listings)
            })
            .collect())
    }

    async fn company_images(&self) -> Result<Vec<CompanyImage>, DatabaseError> {
        self.check()?;
        Ok(self.images.clone())
    }

    async fn events(&self) -> Result<Vec<Event>, DatabaseError> {
        self.check()?;
        Ok(self.events.clone())
    }

    async fn event_with_company(
        &self,
        event_id: i32,
    ) -> Result<Option<(Event, CompanySummary)>, DatabaseError> {
        self.check()?;
        Ok(self
            .events
            .iter()
            .find(|event| event.event_id == event_id)
            .and_then(|event| {
                self.companies
                    .iter()
                    .find(|company| company.company_id == event.company_id)
                    .map(|company| {
                        (event.clone(), CompanySummary {
                            company_id: company.company_id,
                            company_name: company.company_name.clone(),
                        })
                    })
            }))
    }

    async fn event_organizers(&self, event_id: i32) -> Result<Vec<EventOrganizer>, DatabaseError> {
        self.check()?;
        Ok(self
            .organizers
            .iter()
            .filter(|organizer| organizer.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn event_registrations(&self, event_id: i32) -> Result<Vec<Registration>, DatabaseError> {
        self.check()?;
        Ok(self
            .registrations
            .iter()
            .filter(|registration| registration.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn job_listings(&self) -> Result<Vec<JobListing>, DatabaseError> {
        self.check()?;
        Ok(self.job_listings.clone())
    }

    async fn job_listing_with_contacts(
        &self,
        listing_id: i32,
    ) -> Result<Option<(JobListing, Vec<JobListingContact>)>, DatabaseError> {
        self.check()?;
        Ok(self
            .job_listings
            .iter()
            .find(|listing| listing.listing_id == listing_id)
            .map(|listing| {
                let contacts = self
                    .contacts
                    .iter()
                    .filter(|contact| contact.listing_id == listing_id)
                    .cloned()
                    .collect();
                (listing.clone(), contacts)
            }))
    }

    async fn points_for_user(&self, user_id: &str) -> Result<Vec<Point>, DatabaseError> {
        self.check()?;
        Ok(self
            .points
            .iter()
            .filter(|point| point.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn total_points_for_user(&self, user_id: &str) -> Result<i64, DatabaseError> {
        self.check()?;
        Ok(self
            .points
            .iter()
            .filter(|point| point.user_id == user_id)
            .map(|point| i64::from(point.severity))
            .sum())
    }

    async fn student(&self, user_id: &str) -> Result<Option<Student>, DatabaseError> {
        self.check()?;
        Ok(self
            .students
            .iter()
            .find(|student| student.user_id == user_id)
            .cloned())
    }

    async fn published_resources(&self) -> Result<Vec<Resource>, DatabaseError> {
        self.check()?;
        Ok(self
            .resources
            .iter()
            .filter(|resource| resource.published)
            .cloned()
            .collect())
    }
}

/// Identity provider answering from a map and counting its calls.
#[derive(Default)]
pub struct FakeIdentity {
    pub profiles: HashMap<String, UserProfile>,
    pub failing: HashSet<String>,
    pub delays: HashMap<String, Duration>,
    /// Every single lookup waits here, so a test hangs unless all of them run at once.
    pub barrier: Option<Arc<Barrier>>,
    pub batch_fails: bool,
    pub lookups: Mutex<Vec<String>>,
    pub batch_calls: AtomicUsize,
}

impl FakeIdentity {
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.id.clone(), profile))
                .collect(),
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    fn answer(&self, user_id: &str) -> Result<Option<UserProfile>, IdentityError> {
        if self.failing.contains(user_id) {
            return Err(IdentityError::MissingHost(format!("cannot resolve {user_id}")));
        }
        Ok(self.profiles.get(user_id).cloned())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>, IdentityError> {
        self.lookups.lock().unwrap().push(user_id.to_owned());
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delays.get(user_id) {
            tokio::time::sleep(*delay).await;
        }
        self.answer(user_id)
    }

    async fn get_users(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<Option<UserProfile>>, IdentityError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if self.batch_fails {
            return Err(IdentityError::MissingHost("directory unavailable".to_owned()));
        }
        Ok(user_ids
            .iter()
            .map(|user_id| self.answer(user_id).ok().flatten())
            .collect())
    }
}

pub fn services(store: FakeStore, identity: FakeIdentity) -> (Services, Arc<FakeIdentity>) {
    let identity = Arc::new(identity);
    let services = Services::new(Arc::new(store), identity.clone());
    (services, identity)
}
