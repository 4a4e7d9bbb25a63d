use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::Resource;
use crate::schema::resources;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn published(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<Resource>, DatabaseError> {
    Ok(resources::table
        .filter(resources::published.eq(true))
        .select(Resource::as_select())
        .order((resources::created_at.desc(), resources::resource_id.desc()))
        .load(connection)
        .await?)
}
