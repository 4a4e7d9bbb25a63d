//! Business rules enforced by PostgreSQL itself, plus the derived
//! `company_images` view and the `updated_at` bookkeeping.

/// A named `CHECK` constraint on one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConstraint {
    pub name: &'static str,
    pub table: &'static str,
    pub expression: &'static str,
}

impl CheckConstraint {
    #[must_use]
    pub fn add_sql(&self) -> String {
        format!(
            r#"ALTER TABLE "{}" ADD CONSTRAINT "{}" CHECK ({})"#,
            self.table, self.name, self.expression
        )
    }
}

pub const CHECK_CONSTRAINTS: &[CheckConstraint] = &[
    CheckConstraint {
        name: "chk_registration_before_event",
        table: "events",
        expression: "registration_opens < event_start",
    },
    CheckConstraint {
        name: "events_participants_limit_check",
        table: "events",
        expression: "participants_limit > 0",
    },
    CheckConstraint {
        name: "chk_job_listing_contacts_contact_method",
        table: "job_listing_contacts",
        expression: "(email IS NOT NULL) OR (phone IS NOT NULL)",
    },
    CheckConstraint {
        name: "chk_attendance_status",
        table: "registrations",
        expression: "(attendance_status IS NULL) OR (attendance_status = ANY \
                     (ARRAY['attended'::text, 'no_show'::text, 'late'::text]))",
    },
    CheckConstraint {
        name: "chk_registration_status",
        table: "registrations",
        expression: "status = ANY (ARRAY['registered'::text, 'transfer'::text, \
                     'waitlist'::text])",
    },
    CheckConstraint {
        name: "points_severity_check",
        table: "points",
        expression: "(severity > 0) AND (severity <= 10)",
    },
    CheckConstraint {
        name: "students_semester_check",
        table: "students",
        expression: "semester > 0",
    },
    CheckConstraint {
        name: "chk_organizer_role",
        table: "event_organizers",
        expression: "role = ANY (ARRAY['main'::text, 'assistant'::text])",
    },
];

pub const CREATE_STORAGE_SCHEMA: &str = "CREATE SCHEMA IF NOT EXISTS storage";

pub const CREATE_COMPANY_IMAGES_VIEW: &str = "CREATE VIEW company_images WITH \
                                              (security_invoker = true) AS SELECT \
                                              c.company_id, o.id, o.name FROM companies c \
                                              JOIN storage.objects o ON c.company_image = o.id";

pub const DROP_COMPANY_IMAGES_VIEW: &str = "DROP VIEW IF EXISTS company_images";

pub const CREATE_SET_UPDATED_AT_FUNCTION: &str = "CREATE OR REPLACE FUNCTION set_updated_at() \
                                                  RETURNS trigger AS $$ BEGIN NEW.updated_at = \
                                                  now(); RETURN NEW; END; $$ LANGUAGE plpgsql";

pub const DROP_SET_UPDATED_AT_FUNCTION: &str = "DROP FUNCTION IF EXISTS set_updated_at()";

/// Tables whose `updated_at` column is refreshed on every update.
pub const UPDATED_AT_TABLES: &[&str] = &[
    "companies",
    "events",
    "job_listings",
    "job_listing_contacts",
    "registrations",
    "students",
    "resources",
];

#[must_use]
pub fn updated_at_trigger(table: &str) -> String {
    format!(
        r#"CREATE TRIGGER "trg_{table}_updated_at" BEFORE UPDATE ON "{table}" FOR EACH ROW EXECUTE FUNCTION set_updated_at()"#
    )
}
