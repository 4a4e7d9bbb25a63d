use std::io::Write;

use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::storage::objects;
use crate::schema::{
    companies, company_images, event_organizers, events, job_listing_contacts, job_listings,
    points, registrations, resources, students,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Closed set of values stored in a `text` column and guarded by a check
/// constraint.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Serialize,
            Deserialize,
        )]
        #[diesel(sql_type = Text)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
                let value = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
                Ok(value.parse()?)
            }
        }

        impl ToSql<Text, Pg> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                out.write_all(self.as_str().as_bytes())?;
                Ok(IsNull::No)
            }
        }
    };
}

text_enum! {
    RegistrationStatus {
        Registered => "registered",
        Transfer => "transfer",
        Waitlist => "waitlist",
    }
}

text_enum! {
    AttendanceStatus {
        Attended => "attended",
        NoShow => "no_show",
        Late => "late",
    }
}

text_enum! {
    OrganizerRole {
        Main => "main",
        Assistant => "assistant",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = objects, check_for_backend(Pg))]
pub struct StorageObject {
    pub id: Uuid,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = companies, primary_key(company_id), check_for_backend(Pg))]
pub struct Company {
    pub company_id: i32,
    pub company_name: String,
    pub org_number: Option<String>,
    pub description: Option<String>,
    pub company_image: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The public part of a company that is embedded into other responses.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = companies, check_for_backend(Pg))]
pub struct CompanySummary {
    pub company_id: i32,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = company_images, check_for_backend(Pg))]
pub struct CompanyImage {
    pub company_id: i32,
    pub id: Uuid,
    pub name: Option<String>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(
    table_name = events,
    primary_key(event_id),
    belongs_to(Company),
    check_for_backend(Pg)
)]
pub struct Event {
    pub event_id: i32,
    pub title: String,
    pub teaser: Option<String>,
    pub description: Option<String>,
    pub event_start: DateTime<Utc>,
    pub registration_opens: DateTime<Utc>,
    pub participants_limit: i32,
    pub location: String,
    pub food: String,
    pub language: String,
    pub age_restrictions: Option<String>,
    pub external_url: Option<String>,
    pub company_id: i32,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(
    table_name = job_listings,
    primary_key(listing_id),
    belongs_to(Company),
    check_for_backend(Pg)
)]
pub struct JobListing {
    pub listing_id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub teaser: String,
    pub description: String,
    pub application_url: String,
    pub published: bool,
    pub company_id: i32,
    pub deadline: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(
    table_name = job_listing_contacts,
    primary_key(contact_id),
    belongs_to(JobListing, foreign_key = listing_id),
    check_for_backend(Pg)
)]
pub struct JobListingContact {
    pub contact_id: i32,
    pub listing_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(
    table_name = registrations,
    primary_key(registration_id),
    belongs_to(Event),
    check_for_backend(Pg)
)]
pub struct Registration {
    pub registration_id: i32,
    pub event_id: i32,
    pub user_id: String,
    pub note: Option<String>,
    pub status: RegistrationStatus,
    pub registration_time: Option<DateTime<Utc>>,
    pub attendance_status: Option<AttendanceStatus>,
    pub attendance_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(
    table_name = event_organizers,
    primary_key(event_id, user_id),
    belongs_to(Event),
    check_for_backend(Pg)
)]
pub struct EventOrganizer {
    pub event_id: i32,
    pub user_id: String,
    pub role: OrganizerRole,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = points, primary_key(point_id), check_for_backend(Pg))]
pub struct Point {
    pub point_id: i32,
    pub user_id: String,
    pub reason: String,
    pub severity: i32,
    pub awarded_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = students, primary_key(user_id), check_for_backend(Pg))]
pub struct Student {
    pub user_id: String,
    pub study_program: String,
    pub degree: String,
    pub semester: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = resources, primary_key(resource_id), check_for_backend(Pg))]
pub struct Resource {
    pub resource_id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tag: Option<String>,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
