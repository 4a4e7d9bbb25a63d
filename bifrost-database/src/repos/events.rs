use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::{CompanySummary, Event, EventOrganizer, Registration};
use crate::schema::{companies, event_organizers, events, registrations};

#[tracing::instrument(level = "debug", skip_all)]
pub async fn all(connection: &mut AsyncPgConnection) -> Result<Vec<Event>, DatabaseError> {
    Ok(events::table
        .select(Event::as_select())
        .order(events::event_id)
        .load(connection)
        .await?)
}

/// The event and the public fields of its company in a single join.
#[tracing::instrument(level = "debug", skip(connection))]
pub async fn with_company(
    connection: &mut AsyncPgConnection,
    event_id: i32,
) -> Result<Option<(Event, CompanySummary)>, DatabaseError> {
    Ok(events::table
        .inner_join(companies::table)
        .filter(events::event_id.eq(event_id))
        .select((Event::as_select(), CompanySummary::as_select()))
        .first(connection)
        .await
        .optional()?)
}

#[tracing::instrument(level = "debug", skip(connection))]
pub async fn organizers(
    connection: &mut AsyncPgConnection,
    event_id: i32,
) -> Result<Vec<EventOrganizer>, DatabaseError> {
    Ok(event_organizers::table
        .filter(event_organizers::event_id.eq(event_id))
        .select(EventOrganizer::as_select())
        .order((event_organizers::created_at, event_organizers::user_id))
        .load(connection)
        .await?)
}

#[tracing::instrument(level = "debug", skip(connection))]
pub async fn registrations(
    connection: &mut AsyncPgConnection,
    event_id: i32,
) -> Result<Vec<Registration>, DatabaseError> {
    Ok(registrations::table
        .filter(registrations::event_id.eq(event_id))
        .select(Registration::as_select())
        .order((
            registrations::registration_time,
            registrations::registration_id,
        ))
        .load(connection)
        .await?)
}
