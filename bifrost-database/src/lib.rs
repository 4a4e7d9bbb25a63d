pub mod error;
pub mod models;
pub mod repos;
pub mod schema;

use diesel_async::pooled_connection::deadpool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
pub use diesel_async::AsyncPgConnection;
pub use error::DatabaseError;
use tracing::debug;

pub type Pool = deadpool::Pool<AsyncPgConnection>;

// https://github.com/tokio-rs/axum/tree/main/examples/diesel-async-postgres

/// Builds the connection pool. Connections are opened lazily on first checkout.
pub fn get_database_connection(database_url: &str) -> Result<Pool, DatabaseError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(config).build()?;
    debug!(max_size = pool.status().max_size, "created database pool");
    Ok(pool)
}

pub fn get_database_connection_from_env() -> Result<Pool, DatabaseError> {
    let database_url = std::env::var("DATABASE_URL")?;
    get_database_connection(&database_url)
}
