use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum DbInitError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("failed to connect to the database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Opens the pool, checks connectivity and brings the schema up to date.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DbInitError> {
    let database_url = config.connection_url()?;

    // `connect` opens the first connection eagerly, so bad credentials or an
    // unreachable host fail here.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&database_url)
        .await?;
    log::info!("Connected to database {} on {}:{}", config.name, config.host, config.port);

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
