use sea_orm_migration::prelude::*;

/// Schema owned by the object store. Only `objects.id` is referenced from here.
pub const STORAGE_SCHEMA: &str = "storage";

fn storage_objects() -> TableRef {
    (Alias::new(STORAGE_SCHEMA), StorageObjects::Table).into_table_ref()
}

fn serial<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn text<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).text().not_null().to_owned()
}

fn optional_text<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).text().null().to_owned()
}

fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

/// `created_at` / `updated_at` style column, filled in by the database.
fn timestamp_now<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn published<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(DeriveIden)]
pub enum StorageObjects {
    #[sea_orm(iden = "objects")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    CompanyId,
    CompanyName,
    OrgNumber,
    Description,
    CompanyImage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    EventId,
    Title,
    Teaser,
    Description,
    EventStart,
    RegistrationOpens,
    ParticipantsLimit,
    Location,
    Food,
    Language,
    AgeRestrictions,
    ExternalUrl,
    CompanyId,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum JobListings {
    Table,
    ListingId,
    Title,
    Type,
    Teaser,
    Description,
    ApplicationUrl,
    Published,
    CompanyId,
    Deadline,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum JobListingContacts {
    Table,
    ContactId,
    ListingId,
    Name,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Registrations {
    Table,
    RegistrationId,
    EventId,
    UserId,
    Note,
    Status,
    RegistrationTime,
    AttendanceStatus,
    AttendanceTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Points {
    Table,
    PointId,
    UserId,
    Reason,
    Severity,
    AwardedTime,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    UserId,
    StudyProgram,
    Degree,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Resources {
    Table,
    ResourceId,
    Title,
    Content,
    Excerpt,
    Tag,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum EventOrganizers {
    Table,
    EventId,
    UserId,
    Role,
    CreatedAt,
}

#[must_use]
pub fn storage_objects_table() -> TableCreateStatement {
    Table::create()
        .table(storage_objects())
        .if_not_exists()
        .col(ColumnDef::new(StorageObjects::Id).uuid().not_null().primary_key())
        .col(&mut optional_text(StorageObjects::Name))
        .to_owned()
}

#[must_use]
pub fn companies_table() -> TableCreateStatement {
    Table::create()
        .table(Companies::Table)
        .col(&mut serial(Companies::CompanyId))
        .col(&mut text(Companies::CompanyName))
        .col(&mut optional_text(Companies::OrgNumber))
        .col(&mut optional_text(Companies::Description))
        .col(ColumnDef::new(Companies::CompanyImage).uuid().null())
        .col(&mut timestamp_now(Companies::CreatedAt))
        .col(&mut timestamp_now(Companies::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("companies_company_image_fkey")
                .from(Companies::Table, Companies::CompanyImage)
                .to(storage_objects(), StorageObjects::Id),
        )
        .to_owned()
}

#[must_use]
pub fn events_table() -> TableCreateStatement {
    Table::create()
        .table(Events::Table)
        .col(&mut serial(Events::EventId))
        .col(&mut text(Events::Title))
        .col(&mut optional_text(Events::Teaser))
        .col(&mut optional_text(Events::Description))
        .col(&mut timestamp(Events::EventStart))
        .col(&mut timestamp(Events::RegistrationOpens))
        .col(ColumnDef::new(Events::ParticipantsLimit).integer().not_null())
        .col(&mut text(Events::Location))
        .col(&mut text(Events::Food))
        .col(ColumnDef::new(Events::Language).text().not_null().default("Norsk"))
        .col(&mut optional_text(Events::AgeRestrictions))
        .col(&mut optional_text(Events::ExternalUrl))
        .col(ColumnDef::new(Events::CompanyId).integer().not_null())
        .col(&mut published(Events::Published))
        .col(&mut timestamp_now(Events::CreatedAt))
        .col(&mut timestamp_now(Events::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_events_company")
                .from(Events::Table, Events::CompanyId)
                .to(Companies::Table, Companies::CompanyId)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

#[must_use]
pub fn job_listings_table() -> TableCreateStatement {
    Table::create()
        .table(JobListings::Table)
        .col(&mut serial(JobListings::ListingId))
        .col(&mut text(JobListings::Title))
        .col(&mut text(JobListings::Type))
        .col(&mut text(JobListings::Teaser))
        .col(&mut text(JobListings::Description))
        .col(&mut text(JobListings::ApplicationUrl))
        .col(&mut published(JobListings::Published))
        .col(ColumnDef::new(JobListings::CompanyId).integer().not_null())
        .col(&mut timestamp(JobListings::Deadline))
        .col(&mut timestamp_now(JobListings::CreatedAt))
        .col(&mut timestamp_now(JobListings::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_job_listings_company")
                .from(JobListings::Table, JobListings::CompanyId)
                .to(Companies::Table, Companies::CompanyId)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

#[must_use]
pub fn job_listing_contacts_table() -> TableCreateStatement {
    Table::create()
        .table(JobListingContacts::Table)
        .col(&mut serial(JobListingContacts::ContactId))
        .col(ColumnDef::new(JobListingContacts::ListingId).integer().not_null())
        .col(&mut text(JobListingContacts::Name))
        .col(&mut optional_text(JobListingContacts::Email))
        .col(&mut optional_text(JobListingContacts::Phone))
        .col(&mut timestamp_now(JobListingContacts::CreatedAt))
        .col(&mut timestamp_now(JobListingContacts::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_job_listing_contacts_listing")
                .from(JobListingContacts::Table, JobListingContacts::ListingId)
                .to(JobListings::Table, JobListings::ListingId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[must_use]
pub fn registrations_table() -> TableCreateStatement {
    Table::create()
        .table(Registrations::Table)
        .col(&mut serial(Registrations::RegistrationId))
        .col(ColumnDef::new(Registrations::EventId).integer().not_null())
        .col(&mut text(Registrations::UserId))
        .col(&mut optional_text(Registrations::Note))
        .col(
            ColumnDef::new(Registrations::Status)
                .text()
                .not_null()
                .default("registered"),
        )
        .col(&mut timestamp_now(Registrations::RegistrationTime))
        .col(&mut optional_text(Registrations::AttendanceStatus))
        .col(
            ColumnDef::new(Registrations::AttendanceTime)
                .timestamp_with_time_zone()
                .null(),
        )
        .col(&mut timestamp_now(Registrations::CreatedAt))
        .col(&mut timestamp_now(Registrations::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_registrations_event")
                .from(Registrations::Table, Registrations::EventId)
                .to(Events::Table, Events::EventId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[must_use]
pub fn points_table() -> TableCreateStatement {
    Table::create()
        .table(Points::Table)
        .col(&mut serial(Points::PointId))
        .col(&mut text(Points::UserId))
        .col(&mut text(Points::Reason))
        .col(ColumnDef::new(Points::Severity).integer().not_null())
        .col(&mut timestamp_now(Points::AwardedTime))
        .col(&mut timestamp_now(Points::CreatedAt))
        .to_owned()
}

#[must_use]
pub fn students_table() -> TableCreateStatement {
    Table::create()
        .table(Students::Table)
        .col(ColumnDef::new(Students::UserId).text().not_null().primary_key())
        .col(&mut text(Students::StudyProgram))
        .col(&mut text(Students::Degree))
        .col(ColumnDef::new(Students::Semester).integer().not_null())
        .col(&mut timestamp_now(Students::CreatedAt))
        .col(&mut timestamp_now(Students::UpdatedAt))
        .to_owned()
}

#[must_use]
pub fn resources_table() -> TableCreateStatement {
    Table::create()
        .table(Resources::Table)
        .col(&mut serial(Resources::ResourceId))
        .col(&mut text(Resources::Title))
        .col(&mut text(Resources::Content))
        .col(&mut optional_text(Resources::Excerpt))
        .col(&mut optional_text(Resources::Tag))
        .col(&mut published(Resources::Published))
        .col(&mut timestamp_now(Resources::CreatedAt))
        .col(&mut timestamp_now(Resources::UpdatedAt))
        .to_owned()
}

#[must_use]
pub fn event_organizers_table() -> TableCreateStatement {
    Table::create()
        .table(EventOrganizers::Table)
        .col(ColumnDef::new(EventOrganizers::EventId).integer().not_null())
        .col(&mut text(EventOrganizers::UserId))
        .col(
            ColumnDef::new(EventOrganizers::Role)
                .text()
                .not_null()
                .default("assistant"),
        )
        .col(&mut timestamp_now(EventOrganizers::CreatedAt))
        .primary_key(
            Index::create()
                .name("event_organizers_pkey")
                .col(EventOrganizers::EventId)
                .col(EventOrganizers::UserId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_event_organizers_event")
                .from(EventOrganizers::Table, EventOrganizers::EventId)
                .to(Events::Table, Events::EventId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// Tables in creation order, parents before children.
#[must_use]
pub fn tables() -> Vec<TableCreateStatement> {
    vec![
        storage_objects_table(),
        companies_table(),
        events_table(),
        job_listings_table(),
        job_listing_contacts_table(),
        registrations_table(),
        points_table(),
        students_table(),
        resources_table(),
        event_organizers_table(),
    ]
}

fn index<T, C>(name: &str, table: T, column: C) -> IndexCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    Index::create()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}

#[must_use]
pub fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        index("idx_events_company", Events::Table, Events::CompanyId),
        index(
            "idx_events_registration_opens",
            Events::Table,
            Events::RegistrationOpens,
        ),
        index("idx_events_start", Events::Table, Events::EventStart),
        index(
            "idx_job_listings_company",
            JobListings::Table,
            JobListings::CompanyId,
        ),
        index(
            "idx_job_listings_deadline",
            JobListings::Table,
            JobListings::Deadline,
        ),
        index(
            "idx_job_listing_contacts_listing",
            JobListingContacts::Table,
            JobListingContacts::ListingId,
        ),
        index(
            "idx_registrations_event",
            Registrations::Table,
            Registrations::EventId,
        ),
        index(
            "idx_registrations_status",
            Registrations::Table,
            Registrations::Status,
        ),
        index(
            "idx_registrations_user",
            Registrations::Table,
            Registrations::UserId,
        ),
        Index::create()
            .unique()
            .name("registrations_event_id_user_id_key")
            .table(Registrations::Table)
            .col(Registrations::EventId)
            .col(Registrations::UserId)
            .to_owned(),
        index(
            "idx_points_awarded_time",
            Points::Table,
            Points::AwardedTime,
        ),
        index("idx_points_user", Points::Table, Points::UserId),
        index(
            "idx_resources_created_at",
            Resources::Table,
            Resources::CreatedAt,
        ),
        index("idx_resources_title", Resources::Table, Resources::Title),
    ]
}

/// Tables in drop order, children before parents. `storage.objects` is left
/// alone because the object store may own it.
#[must_use]
pub fn drop_tables() -> Vec<TableDropStatement> {
    [
        EventOrganizers::Table.into_iden(),
        Resources::Table.into_iden(),
        Students::Table.into_iden(),
        Points::Table.into_iden(),
        Registrations::Table.into_iden(),
        JobListingContacts::Table.into_iden(),
        JobListings::Table.into_iden(),
        Events::Table.into_iden(),
        Companies::Table.into_iden(),
    ]
    .into_iter()
    .map(|table| Table::drop().table(table).if_exists().to_owned())
    .collect()
}
