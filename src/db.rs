use std::{sync::Arc, time::Duration};

use migration::{CastMigrator, MigratorTrait, MovieMigrator};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection,
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    service::ServiceKind,
};

// An in-memory database lives only as long as its last open connection.
const IN_MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 86_400);

/// Process-wide handle to the storage engine.
///
/// Wraps a bounded connection pool that is opened by [`ConnectionHandle::connect`]
/// and drained by [`ConnectionHandle::disconnect`]. Clones share the same pool.
#[derive(Clone)]
pub struct ConnectionHandle {
    inner: Arc<Inner>,
}

struct Inner {
    uri: String,
    pool_size: u32,
    conn: RwLock<Option<DatabaseConnection>>,
}

impl ConnectionHandle {
    pub fn new(uri: impl Into<String>, pool_size: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                uri: uri.into(),
                pool_size: pool_size.max(1),
                conn: RwLock::new(None),
            }),
        }
    }

    pub async fn connect(&self) -> AppResult<()> {
        let mut opts = ConnectOptions::new(self.inner.uri.clone());
        opts.max_connections(self.inner.pool_size).min_connections(1);
        // Applied on every pooled connection as it opens.
        opts.map_sqlx_sqlite_opts(|sqlite| {
            sqlite.journal_mode(SqliteJournalMode::Wal).synchronous(SqliteSynchronous::Normal)
        });
        if is_in_memory(&self.inner.uri) {
            opts.max_lifetime(IN_MEMORY_CONN_LIFETIME).idle_timeout(IN_MEMORY_CONN_LIFETIME);
        }

        let conn =
            Database::connect(opts).await.map_err(|e| AppError::Connection(e.to_string()))?;

        let previous = self.inner.conn.write().await.replace(conn);
        if let Some(previous) = previous {
            debug!("replacing existing database connection");
            previous.close().await?;
        }

        info!(pool_size = self.inner.pool_size, "database connected");
        Ok(())
    }

    /// Creates the service's table if it does not exist. Safe to run on every start.
    pub async fn initialize_schema(&self, kind: ServiceKind) -> AppResult<()> {
        let conn = self.connection().await?;
        match kind {
            ServiceKind::Movie => MovieMigrator::up(&conn, None).await?,
            ServiceKind::Cast => CastMigrator::up(&conn, None).await?,
        }
        debug!(service = %kind, "schema up to date");
        Ok(())
    }

    pub async fn disconnect(&self) -> AppResult<()> {
        let taken = self.inner.conn.write().await.take();
        if let Some(conn) = taken {
            conn.close().await?;
            info!("database disconnected");
        }
        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.conn.read().await.is_some()
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.connection().await?.ping().await?;
        Ok(())
    }

    /// Checks out the shared pool, or fails with a connection error when not connected.
    pub async fn connection(&self) -> AppResult<DatabaseConnection> {
        self.inner
            .conn
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::Connection("not connected".to_string()))
    }
}

fn is_in_memory(uri: &str) -> bool {
    uri.starts_with("sqlite:") && (uri.contains(":memory:") || uri.contains("mode=memory"))
}
