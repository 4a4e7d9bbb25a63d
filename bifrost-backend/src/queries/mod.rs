pub mod companies;
pub mod events;
pub mod job_listings;
pub mod students;
