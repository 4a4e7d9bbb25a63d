use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::DatabaseError;
use crate::models::Student;
use crate::schema::students;

#[tracing::instrument(level = "debug", skip(connection))]
pub async fn find(
    connection: &mut AsyncPgConnection,
    user_id: &str,
) -> Result<Option<Student>, DatabaseError> {
    Ok(students::table
        .find(user_id)
        .select(Student::as_select())
        .first(connection)
        .await
        .optional()?)
}
