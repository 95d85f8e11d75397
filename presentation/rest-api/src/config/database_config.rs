use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables and
/// apply pending migrations.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DB_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory with SQL migrations (default:
///   "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL")?;
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max_connections) = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|value| value.parse().ok())
    {
        config = config.with_max_connections(max_connections);
    }
    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}
