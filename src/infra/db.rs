use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Opens the school-store pool. Sizing comes from `AppConfig`, not a constant
/// baked in here.
pub async fn init_db(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("schoolgate could not reach Postgres at DATABASE_URL: {e}"))?;

    info!(max_connections, "school store pool ready");
    Ok(pool)
}
