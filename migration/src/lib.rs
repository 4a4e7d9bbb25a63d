pub mod constraints;
mod m20250101_000001_create_schema;
pub mod tables;

pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm;

use crate::constraints::{
    updated_at_trigger, CheckConstraint, CHECK_CONSTRAINTS, CREATE_COMPANY_IMAGES_VIEW,
    CREATE_SET_UPDATED_AT_FUNCTION, CREATE_STORAGE_SCHEMA, UPDATED_AT_TABLES,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_schema::Migration)]
    }
}

/// The complete schema as PostgreSQL statements, in the order the migration
/// applies them. The migration executes exactly this list.
#[must_use]
pub fn postgres_schema() -> Vec<String> {
    let mut statements = vec![CREATE_STORAGE_SCHEMA.to_owned()];
    statements.extend(
        tables::tables()
            .iter()
            .map(|table| table.to_string(PostgresQueryBuilder)),
    );
    statements.extend(
        tables::indexes()
            .iter()
            .map(|index| index.to_string(PostgresQueryBuilder)),
    );
    statements.extend(CHECK_CONSTRAINTS.iter().map(CheckConstraint::add_sql));
    statements.push(CREATE_COMPANY_IMAGES_VIEW.to_owned());
    statements.push(CREATE_SET_UPDATED_AT_FUNCTION.to_owned());
    statements.extend(UPDATED_AT_TABLES.iter().map(|table| updated_at_trigger(table)));
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{
        companies_table, event_organizers_table, events_table, job_listing_contacts_table,
        job_listings_table, registrations_table,
    };

    fn render(table: &TableCreateStatement) -> String {
        table.to_string(PostgresQueryBuilder)
    }

    #[test]
    fn companies_are_protected_from_deletion() {
        let events = render(&events_table());
        assert!(events.contains(r#""fk_events_company""#));
        assert!(events.contains("ON DELETE RESTRICT"));

        let job_listings = render(&job_listings_table());
        assert!(job_listings.contains(r#""fk_job_listings_company""#));
        assert!(job_listings.contains("ON DELETE RESTRICT"));
    }

    #[test]
    fn children_are_deleted_with_their_parent() {
        for (table, constraint) in [
            (registrations_table(), "fk_registrations_event"),
            (event_organizers_table(), "fk_event_organizers_event"),
            (job_listing_contacts_table(), "fk_job_listing_contacts_listing"),
        ] {
            let sql = render(&table);
            assert!(sql.contains(constraint), "{sql}");
            assert!(sql.contains("ON DELETE CASCADE"), "{sql}");
        }
    }

    #[test]
    fn company_image_references_storage_schema() {
        let sql = render(&companies_table());
        assert!(sql.contains(r#""companies_company_image_fkey""#));
        assert!(sql.contains(r#""storage"."objects""#), "{sql}");
        assert!(!sql.contains("ON DELETE"), "{sql}");
    }

    #[test]
    fn organizers_use_composite_primary_key() {
        let sql = render(&event_organizers_table());
        assert!(sql.contains(r#""event_organizers_pkey""#), "{sql}");
        assert!(sql.contains(r#"PRIMARY KEY ("event_id", "user_id")"#), "{sql}");
    }

    #[test]
    fn event_defaults() {
        let sql = render(&events_table());
        assert!(sql.contains("'Norsk'"), "{sql}");
        let sql = render(&registrations_table());
        assert!(sql.contains("'registered'"), "{sql}");
        let sql = render(&event_organizers_table());
        assert!(sql.contains("'assistant'"), "{sql}");
    }

    #[test]
    fn indexes_are_named_and_point_at_their_table() {
        let rendered: Vec<String> = tables::indexes()
            .iter()
            .map(|index| index.to_string(PostgresQueryBuilder))
            .collect();
        assert!(
            rendered
                .iter()
                .any(|sql| sql.contains(r#""idx_events_company" ON "events" ("company_id")"#)),
            "{rendered:?}"
        );
        for sql in &rendered {
            assert!(sql.contains(" ON \""), "{sql}");
        }
    }

    #[test]
    fn registrations_are_unique_per_event_and_user() {
        let unique = tables::indexes()
            .iter()
            .map(|index| index.to_string(PostgresQueryBuilder))
            .find(|sql| sql.contains("registrations_event_id_user_id_key"))
            .expect("unique index is declared");
        assert!(unique.starts_with("CREATE UNIQUE INDEX"), "{unique}");
        assert!(unique.contains(r#"("event_id", "user_id")"#), "{unique}");
    }

    #[test]
    fn check_constraints_cover_business_rules() {
        let names: Vec<_> = CHECK_CONSTRAINTS.iter().map(|check| check.name).collect();
        for expected in [
            "chk_registration_before_event",
            "events_participants_limit_check",
            "chk_job_listing_contacts_contact_method",
            "chk_attendance_status",
            "chk_registration_status",
            "points_severity_check",
            "students_semester_check",
            "chk_organizer_role",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }

        let ordering = CHECK_CONSTRAINTS
            .iter()
            .find(|check| check.name == "chk_registration_before_event")
            .expect("declared above");
        assert_eq!(
            ordering.add_sql(),
            r#"ALTER TABLE "events" ADD CONSTRAINT "chk_registration_before_event" CHECK (registration_opens < event_start)"#
        );
    }

    #[test]
    fn schema_is_ordered_for_a_fresh_database() {
        let schema = postgres_schema();
        let position = |needle: &str| {
            schema
                .iter()
                .position(|statement| statement.contains(needle))
                .unwrap_or_else(|| panic!("{needle} not in schema"))
        };

        assert_eq!(position("CREATE SCHEMA IF NOT EXISTS storage"), 0);
        assert!(position(r#"CREATE TABLE IF NOT EXISTS "storage"."objects""#) < position(r#"CREATE TABLE "companies""#));
        assert!(position(r#"CREATE TABLE "companies""#) < position(r#"CREATE TABLE "events""#));
        assert!(position(r#"CREATE TABLE "events""#) < position(r#"CREATE TABLE "registrations""#));
        assert!(position(r#"CREATE TABLE "registrations""#) < position("chk_registration_status"));
        assert!(position("CREATE VIEW company_images") < position("CREATE OR REPLACE FUNCTION"));
        assert!(position("CREATE OR REPLACE FUNCTION") < position("trg_companies_updated_at"));
        assert_eq!(
            schema.len(),
            1 + tables::tables().len()
                + tables::indexes().len()
                + CHECK_CONSTRAINTS.len()
                + 2
                + UPDATED_AT_TABLES.len()
        );
    }
}
