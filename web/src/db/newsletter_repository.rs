#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// Add a subscriber. Subscribing twice is a no-op; returns whether the address was new.
#[cfg(feature = "ssr")]
pub async fn add_subscriber(email: &str) -> DbResult<bool> {
    let pool = crate::db::pool::get_pool()?;

    let result = sqlx::query(
        "INSERT INTO newsletter_subscribers (email)
         VALUES ($1)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
