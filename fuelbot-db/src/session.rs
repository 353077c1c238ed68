//! Database handle and scoped session acquisition
//!
//! [`Db`] is constructed once at startup and passed explicitly to whatever
//! needs store access; there is no module-level engine. Units of work check a
//! [`Session`] out of the shared pool and the connection goes back on drop,
//! on every exit path.

use std::future::Future;
use std::ops::{Deref, DerefMut};

use fuelbot_core::Settings;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};
use tracing::debug;

use crate::pool::{create_pool, create_pool_with_options};

/// Shared database handle wrapping the process-wide connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect using the resolved application settings.
    ///
    /// # Errors
    ///
    /// Propagates connection and authentication failures unchanged; callers
    /// at startup should treat them as fatal.
    pub async fn connect(settings: &Settings) -> Result<Self, sqlx::Error> {
        let pool = create_pool(&settings.database_url()).await?;
        debug!(
            host = %settings.postgres_host,
            db = %settings.postgres_db,
            "connected database pool"
        );
        Ok(Self { pool })
    }

    /// Connect to an explicit URL with an explicit connection limit.
    ///
    /// Mainly for tests that want a deliberately tiny pool.
    pub async fn connect_with_options(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let pool = create_pool_with_options(database_url, max_connections).await?;
        Ok(Self { pool })
    }

    /// The underlying pool, for code that wants to run one-off queries
    /// without session bookkeeping.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check one session out of the pool.
    ///
    /// Suspends until a connection is free. The session is valid for one
    /// unit of work and must not be shared across concurrent tasks; each
    /// task acquires its own.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    /// Run one unit of work against a freshly acquired session.
    ///
    /// The session is released when `work`'s future resolves or is dropped,
    /// whether the work completed, returned an error, or was cancelled.
    ///
    /// Rows fetched inside the scope are plain owned values; they remain
    /// readable after a commit without a fresh load.
    pub async fn with_session<T, E, F, Fut>(&self, work: F) -> Result<T, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let session = self.session().await?;
        work(session).await
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    /// Called once at process shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One checked-out connection, scoped to one unit of work.
///
/// Dereferences to [`PgConnection`] so it can be used anywhere sqlx expects
/// an executor. Dropping it returns the connection to the pool.
pub struct Session {
    conn: PoolConnection<Postgres>,
}

impl Session {
    /// The underlying connection, for passing to sqlx query executors.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Deref for Session {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p fuelbot-db

    fn database_url() -> String {
        std::env::var("DATABASE_URL").expect("DATABASE_URL required")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn scope_end_releases_the_session() {
        // With a single-connection pool, a leaked session would make the
        // second acquisition hang on an empty pool.
        let db = Db::connect_with_options(&database_url(), 1)
            .await
            .expect("pool creation failed");

        {
            // Acquire and let the scope end without running anything
            let _session = db.session().await.expect("first acquisition failed");
        }

        let mut session = db.session().await.expect("second acquisition failed");
        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(session.conn())
            .await
            .expect("query failed");
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn failed_work_still_releases_the_session() {
        let db = Db::connect_with_options(&database_url(), 1)
            .await
            .expect("pool creation failed");

        let result: Result<(), sqlx::Error> = db
            .with_session(|mut session| async move {
                // Touch the connection, then fail partway through the scope
                sqlx::query("SELECT 1").execute(session.conn()).await?;
                Err(sqlx::Error::RowNotFound)
            })
            .await;
        assert!(matches!(result, Err(sqlx::Error::RowNotFound)));

        // The connection must be back in the pool despite the failure
        let mut session = db.session().await.expect("acquisition after failure");
        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(session.conn())
            .await
            .expect("query failed");
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn with_session_returns_work_output() {
        let db = Db::connect_with_options(&database_url(), 1)
            .await
            .expect("pool creation failed");

        let sum: i32 = db
            .with_session(|mut session| async move {
                let row: (i32,) = sqlx::query_as("SELECT 40 + 2")
                    .fetch_one(session.conn())
                    .await?;
                Ok::<_, sqlx::Error>(row.0)
            })
            .await
            .expect("work failed");

        assert_eq!(sum, 42);
    }
}
