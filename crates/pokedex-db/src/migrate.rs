use sqlx::PgPool;
use tracing::info;

/// Apply schema migrations (versioned, tracked in `_sqlx_migrations`).
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Applying schema migrations");
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;
    info!("Schema up to date");
    Ok(())
}
