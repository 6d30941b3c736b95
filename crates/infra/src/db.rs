//! SQLite connection pool and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Pool settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DbSettings {
    /// `sqlite::memory:` gives every connection its own database, so in-memory
    /// URLs must stay on a single, never-recycled connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Open the pool, creating the database file if it does not exist yet.
pub async fn connect(settings: &DbSettings) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.url)
        .with_context(|| format!("invalid database url {:?}", settings.url))?
        .create_if_missing(true);

    let pool_options = if settings.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open SQLite database at {:?}", settings.url))?;

    tracing::debug!(url = %settings.url, "sqlite pool ready");
    Ok(pool)
}

/// Create the `items` table if absent. There is no migration versioning.
pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            unit     TEXT NOT NULL,
            category TEXT NOT NULL,
            location TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create items table")?;

    Ok(())
}
