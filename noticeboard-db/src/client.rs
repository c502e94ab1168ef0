use noticeboard_common::model::{Id, ModelValidationError, post::PostMarker};
use sqlx::{
    SqlitePool,
    migrate::{MigrateError, Migrator},
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};
use thiserror::Error;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!();

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Post with id {0} was not found.")]
    PostNotFound(Id<PostMarker>),
    #[error("Post with id {0} was already liked by this client.")]
    DuplicateLike(Id<PostMarker>),
    #[error("An object in the database was invalid: {0}")]
    Data(#[from] ModelValidationError),
    #[error("Migrating the database failed: {0}")]
    Migrate(#[from] MigrateError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Translates constraint violations on rows referencing `post_id`.
    pub(crate) fn from_constraint(err: sqlx::Error, post_id: Id<PostMarker>) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::DuplicateLike(post_id)
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::PostNotFound(post_id)
            }
            _ => Self::Sqlx(err),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DbClient {
    pub(crate) pool: SqlitePool,
}

impl DbClient {
    /// Wraps an existing pool, bringing its schema up to date.
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        MIGRATOR.run(&pool).await?;

        Ok(Self { pool })
    }

    /// Opens the data file at `path`, creating it if needed.
    pub async fn connect(path: &Path, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!(path = %path.display(), "Connected to database");

        Self::new(pool).await
    }

    /// A store that lives only as long as the returned client.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // Each connection to `:memory:` is its own database, so the pool must
        // hold exactly one and never recycle it.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::new(pool).await
    }

    /// Waits for in-flight queries and closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database");
    }
}
