use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::Point;
use crate::schema::points;

/// Points awarded to one user, newest first.
#[tracing::instrument(level = "debug", skip(connection))]
pub async fn for_user(
    connection: &mut AsyncPgConnection,
    user_id: &str,
) -> Result<Vec<Point>, DatabaseError> {
    Ok(points::table
        .filter(points::user_id.eq(user_id))
        .select(Point::as_select())
        .order((points::awarded_time.desc(), points::point_id.desc()))
        .load(connection)
        .await?)
}

/// Sum of all severities, 0 for users without points.
#[tracing::instrument(level = "debug", skip(connection))]
pub async fn total_for_user(
    connection: &mut AsyncPgConnection,
    user_id: &str,
) -> Result<i64, DatabaseError> {
    let total: Option<i64> = points::table
        .filter(points::user_id.eq(user_id))
        .select(diesel::dsl::sum(points::severity))
        .first(connection)
        .await?;
    Ok(total.unwrap_or(0))
}
