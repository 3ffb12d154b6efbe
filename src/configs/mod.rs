use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{ENV, api::error};

pub async fn connect_database() -> Result<SqlitePool, error::SystemError> {
    connect_with_url(&ENV.database_url, ENV.database_max_connections).await
}

/// Opens a pool with foreign keys enforced and applies pending migrations.
///
/// In-memory databases live only as long as their connection, so callers using
/// `sqlite::memory:` should pass `max_connections = 1`.
pub async fn connect_with_url(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, error::SystemError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_slow_threshold(std::time::Duration::from_secs(3))
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database ready at {database_url}");

    Ok(pool)
}
