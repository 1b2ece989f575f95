use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

pub mod models;
pub mod queries;

static DATABASE_POOL: OnceCell<Arc<SqlitePool>> = OnceCell::const_new();

pub async fn initialize_database() -> Result<Arc<SqlitePool>, Box<dyn std::error::Error + Send + Sync>>
{
    let pool = DATABASE_POOL
        .get_or_try_init(|| async {
            let db_path = crate::get_app_data_dir().join("paramd.db");
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            tracing::info!("Opening database at {}", db_path.display());

            let options = SqliteConnectOptions::new()
                .filename(&db_path)
                .create_if_missing(true);

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(5))
                .connect_with(options)
                .await?;

            // Test query to ensure the connection is valid
            sqlx::query("SELECT 1").execute(&pool).await?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;

            Ok::<Arc<SqlitePool>, Box<dyn std::error::Error + Send + Sync>>(Arc::new(pool))
        })
        .await?;

    tracing::info!("Database initialized successfully");

    Ok(pool.clone())
}

pub fn get_database_pool() -> Result<Arc<SqlitePool>, sqlx::Error> {
    DATABASE_POOL
        .get()
        .cloned()
        .ok_or(sqlx::Error::PoolTimedOut)
}

pub async fn cleanup_database() {
    if let Some(pool) = DATABASE_POOL.get() {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    // DB tests share the global pool; this serializes them across modules
    pub static TEST_LOCK: Mutex<()> = Mutex::new(());

    pub async fn initialize_test_database() -> Arc<SqlitePool> {
        DATABASE_POOL
            .get_or_try_init(|| async {
                // Each #[tokio::test] runs its own runtime; a pooled
                // in-memory connection does not survive across them, and its
                // replacement would be a fresh empty database. A file-backed
                // database keeps state across reconnects.
                let db_path =
                    std::env::temp_dir().join(format!("paramd-test-{}.db", std::process::id()));
                let _ = std::fs::remove_file(&db_path);

                let pool = SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(
                        SqliteConnectOptions::new()
                            .filename(&db_path)
                            .create_if_missing(true),
                    )
                    .await?;

                sqlx::migrate!("./migrations").run(&pool).await?;

                Ok::<Arc<SqlitePool>, Box<dyn std::error::Error + Send + Sync>>(Arc::new(pool))
            })
            .await
            .expect("failed to initialize test database")
            .clone()
    }
}
