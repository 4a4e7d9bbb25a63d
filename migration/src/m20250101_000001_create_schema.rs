use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::constraints::{DROP_COMPANY_IMAGES_VIEW, DROP_SET_UPDATED_AT_FUNCTION};
use crate::postgres_schema;
use crate::tables::drop_tables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let connection = manager.get_connection();

        for statement in postgres_schema() {
            connection.execute_unprepared(&statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let connection = manager.get_connection();

        connection.execute_unprepared(DROP_COMPANY_IMAGES_VIEW).await?;

        // dropping the tables also drops their triggers
        for table in drop_tables() {
            manager.drop_table(table).await?;
        }

        connection
            .execute_unprepared(DROP_SET_UPDATED_AT_FUNCTION)
            .await?;

        Ok(())
    }
}
