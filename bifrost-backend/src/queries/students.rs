use bifrost_database::models::{Point, Resource, Student};

use crate::error::{fetch_failed, QueryError};
use crate::services::Services;

impl Services {
    /// `None` for users that never filled in their student profile.
    #[tracing::instrument(skip(self))]
    pub async fn get_student(&self, user_id: &str) -> Result<Option<Student>, QueryError> {
        self.store
            .student(user_id)
            .await
            .map_err(|error| fetch_failed("student", error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_points_for_user(&self, user_id: &str) -> Result<Vec<Point>, QueryError> {
        self.store
            .points_for_user(user_id)
            .await
            .map_err(|error| fetch_failed("points", error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_total_points_for_user(&self, user_id: &str) -> Result<i64, QueryError> {
        self.store
            .total_points_for_user(user_id)
            .await
            .map_err(|error| fetch_failed("points", error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_published_resources(&self) -> Result<Vec<Resource>, QueryError> {
        self.store
            .published_resources()
            .await
            .map_err(|error| fetch_failed("resources", error))
    }
}
