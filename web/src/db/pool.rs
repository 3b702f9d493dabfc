#[cfg(feature = "ssr")]
use sqlx::postgres::PgPoolOptions;
#[cfg(feature = "ssr")]
use sqlx::{PgPool, Pool, Postgres};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;

#[cfg(feature = "ssr")]
static DB_POOL: OnceLock<PgPool> = OnceLock::new();

/// Prepares the pool without connecting. Without `DATABASE_URL` the site still serves
/// pages; only the booking and newsletter operations fail.
#[cfg(feature = "ssr")]
pub fn init_pool(database_url: Option<&str>) -> Result<(), sqlx::Error> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set, booking store disabled");
        return Ok(());
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    DB_POOL.set(pool).map_err(|_| {
        sqlx::Error::Configuration(
            "Database pool already initialized".to_string().into(),
        )
    })?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub fn get_pool() -> Result<&'static Pool<Postgres>, sqlx::Error> {
    DB_POOL.get().ok_or_else(|| {
        sqlx::Error::Configuration("Booking store is not configured (DATABASE_URL).".into())
    })
}
