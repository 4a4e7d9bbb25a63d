//! Reads grouped per aggregate. Every function takes a checked out connection
//! and returns fresh rows, nothing is cached.

pub mod companies;
pub mod events;
pub mod job_listings;
pub mod points;
pub mod resources;
pub mod students;
