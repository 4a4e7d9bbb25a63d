//! Read-only query layer over the relational store, enriching events with
//! organizer names from the identity provider.

pub mod error;
pub mod queries;
mod services;
pub mod store;
pub mod telemetry;
#[cfg(test)]
mod testing;

pub use error::{AppError, QueryError};
pub use queries::events::{EventDetails, Organizer, UNKNOWN_ORGANIZER_NAME};
pub use services::Services;
