use bifrost_database::{AsyncPgConnection, DatabaseError};
use diesel_async::{AsyncConnection, RunQueryDsl};

/// A connection inside a transaction that is never committed, with the whole
/// schema created in a throwaway `search_path`.
pub async fn scratch_database() -> AsyncPgConnection {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mut connection = AsyncPgConnection::establish(&database_url)
        .await
        .expect("database is reachable");
    connection
        .begin_test_transaction()
        .await
        .expect("test transaction");
    execute(&mut connection, "CREATE SCHEMA bifrost_test").await;
    execute(&mut connection, "SET LOCAL search_path TO bifrost_test").await;
    for statement in migration::postgres_schema() {
        execute(&mut connection, &statement).await;
    }
    connection
}

pub async fn execute(connection: &mut AsyncPgConnection, sql: &str) {
    diesel::sql_query(sql)
        .execute(connection)
        .await
        .unwrap_or_else(|error| panic!("{sql}: {error}"));
}

/// Runs a statement that the database has to refuse, keeping the surrounding
/// transaction usable.
pub async fn rejected(connection: &mut AsyncPgConnection, sql: &str) -> DatabaseError {
    execute(connection, "SAVEPOINT attempt").await;
    let error = diesel::sql_query(sql)
        .execute(connection)
        .await
        .expect_err(sql);
    execute(connection, "ROLLBACK TO SAVEPOINT attempt").await;
    DatabaseError::from(error)
}

pub async fn count(connection: &mut AsyncPgConnection, table: &str) -> i64 {
    #[derive(diesel::QueryableByName)]
    struct Count {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    diesel::sql_query(format!("SELECT count(*) AS count FROM {table}"))
        .get_result::<Count>(connection)
        .await
        .expect("count")
        .count
}

pub async fn seed_company(connection: &mut AsyncPgConnection, company_id: i32, name: &str) {
    execute(
        connection,
        &format!(
            "INSERT INTO companies (company_id, company_name) VALUES ({company_id}, '{name}')"
        ),
    )
    .await;
}

pub async fn seed_event(connection: &mut AsyncPgConnection, event_id: i32, company_id: i32) {
    execute(
        connection,
        &format!(
            "INSERT INTO events (event_id, title, event_start, registration_opens, \
             participants_limit, location, food, company_id) VALUES ({event_id}, 'Bedpres \
             {event_id}', now() + interval '7 days', now() + interval '1 day', 40, 'Realfagbygget', \
             'Pizza', {company_id})"
        ),
    )
    .await;
}
