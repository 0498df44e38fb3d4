use sqlx::SqlitePool;

/// Audit row for each attempted generation, written after the credit is
/// taken and before the provider is called.
pub async fn record_generation(db: &SqlitePool, user_id: i64, prompt: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO generations (user_id, prompt) VALUES (?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(prompt)
    .fetch_one(db)
    .await
}
