//! Aux Storage
//!
//! Device-local `SQLite` persistence for the Aux client.
//!
//! This crate stores the credential slot (access token, refresh token,
//! cached user profile) and device preferences as key-value pairs. It is
//! the only writer of those keys besides the auth client itself.
//!
//! # Example
//!
//! ```rust,no_run
//! use aux_core::CredentialStore;
//! use aux_storage::{create_pool, run_migrations, SqliteCredentialStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://aux.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteCredentialStore::new(pool);
//! store.set_access_token("token").await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;

pub mod credentials;

pub use credentials::SqliteCredentialStore;
pub use error::StorageError;
pub use memory::MemoryCredentialStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://aux.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
