// Mirrors the tables created by the `migration` crate.

pub mod storage {
    diesel::table! {
        storage.objects (id) {
            id -> Uuid,
            name -> Nullable<Text>,
        }
    }
}

diesel::table! {
    companies (company_id) {
        company_id -> Int4,
        company_name -> Text,
        org_number -> Nullable<Text>,
        description -> Nullable<Text>,
        company_image -> Nullable<Uuid>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    events (event_id) {
        event_id -> Int4,
        title -> Text,
        teaser -> Nullable<Text>,
        description -> Nullable<Text>,
        event_start -> Timestamptz,
        registration_opens -> Timestamptz,
        participants_limit -> Int4,
        location -> Text,
        food -> Text,
        language -> Text,
        age_restrictions -> Nullable<Text>,
        external_url -> Nullable<Text>,
        company_id -> Int4,
        published -> Bool,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    job_listings (listing_id) {
        listing_id -> Int4,
        title -> Text,
        #[sql_name = "type"]
        listing_type -> Text,
        teaser -> Text,
        description -> Text,
        application_url -> Text,
        published -> Bool,
        company_id -> Int4,
        deadline -> Timestamptz,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    job_listing_contacts (contact_id) {
        contact_id -> Int4,
        listing_id -> Int4,
        name -> Text,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    registrations (registration_id) {
        registration_id -> Int4,
        event_id -> Int4,
        user_id -> Text,
        note -> Nullable<Text>,
        status -> Text,
        registration_time -> Nullable<Timestamptz>,
        attendance_status -> Nullable<Text>,
        attendance_time -> Nullable<Timestamptz>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    points (point_id) {
        point_id -> Int4,
        user_id -> Text,
        reason -> Text,
        severity -> Int4,
        awarded_time -> Nullable<Timestamptz>,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    students (user_id) {
        user_id -> Text,
        study_program -> Text,
        degree -> Text,
        semester -> Int4,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    resources (resource_id) {
        resource_id -> Int4,
        title -> Text,
        content -> Text,
        excerpt -> Nullable<Text>,
        tag -> Nullable<Text>,
        published -> Bool,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    event_organizers (event_id, user_id) {
        event_id -> Int4,
        user_id -> Text,
        role -> Text,
        created_at -> Nullable<Timestamptz>,
    }
}

// A view. Each company has at most one image, so company_id identifies a row.
diesel::table! {
    company_images (company_id) {
        company_id -> Int4,
        id -> Uuid,
        name -> Nullable<Text>,
    }
}

use self::storage::objects;

diesel::joinable!(companies -> objects (company_image));
diesel::joinable!(events -> companies (company_id));
diesel::joinable!(job_listings -> companies (company_id));
diesel::joinable!(job_listing_contacts -> job_listings (listing_id));
diesel::joinable!(registrations -> events (event_id));
diesel::joinable!(event_organizers -> events (event_id));
diesel::joinable!(company_images -> companies (company_id));

diesel::allow_tables_to_appear_in_same_query!(
    objects,
    companies,
    company_images,
    events,
    event_organizers,
    job_listings,
    job_listing_contacts,
    points,
    registrations,
    resources,
    students,
);
