use std::path::Path;
use std::sync::Arc;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use time::macros::format_description;
use time::OffsetDateTime;
use tokio::sync::OnceCell;

use crate::error::{Result, StarterError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type SqliteAsyncConn = SyncConnectionWrapper<SqliteConnection>;
pub type SqlitePool = Pool<SqliteAsyncConn>;
pub type SqlitePooledConn<'a> = PooledConnection<'a, SqliteAsyncConn>;

/// Shared handle to the application database.
///
/// The pool is opened on first use; migrations run exactly once per handle.
/// Clones share the same pool.
#[derive(Clone)]
pub struct Database {
    path: String,
    pool: Arc<OnceCell<SqlitePool>>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

impl Database {
    pub fn new(sqlite_path: impl Into<String>) -> Self {
        Self {
            path: sqlite_path.into(),
            pool: Arc::new(OnceCell::new()),
        }
    }

    /// Opens the database eagerly, surfacing migration errors up front.
    pub async fn open(sqlite_path: impl Into<String>) -> Result<Self> {
        let db = Self::new(sqlite_path);
        db.pool().await?;
        Ok(db)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn conn(&self) -> Result<SqlitePooledConn<'_>> {
        self.pool()
            .await?
            .get()
            .await
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    async fn pool(&self) -> Result<&SqlitePool> {
        self.pool
            .get_or_try_init(|| async {
                let path = self.path();
                ensure_parent_dir(path)?;
                run_migrations(path).await?;
                let manager = AsyncDieselConnectionManager::<SqliteAsyncConn>::new(path);
                let pool = Pool::builder()
                    .build(manager)
                    .await
                    .map_err(|e| StarterError::Database(e.to_string()))?;
                tracing::debug!(path, "database opened");
                Ok(pool)
            })
            .await
    }
}

pub fn ensure_parent_dir(path: &str) -> Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StarterError::Io(e.to_string()))?;
    }
    Ok(())
}

pub fn establish(db_path: &str) -> Result<SqliteConnection> {
    ensure_parent_dir(db_path)?;
    SqliteConnection::establish(db_path).map_err(|e| StarterError::Database(e.to_string()))
}

async fn run_migrations(database_url: &str) -> Result<()> {
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = establish(&database_url)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok::<_, StarterError>(())
    })
    .await
    .map_err(|e| StarterError::Runtime(e.to_string()))??;
    Ok(())
}

/// Current UTC time in SQLite's `CURRENT_TIMESTAMP` layout.
pub fn now_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| "1970-01-01 00:00:00".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_matches_sqlite_layout() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
