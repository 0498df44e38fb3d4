use sqlx::SqlitePool;

use crate::auth::repo_types::User;
use crate::error::ApiError;

const USER_COLUMNS: &str = "id, email, password_hash, credits, created_at";

impl User {
    /// Create a user. Email uniqueness is enforced by the DB constraint.
    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
        initial_credits: i64,
    ) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, credits)
            VALUES (?, ?, ?)
            RETURNING id, email, password_hash, credits, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(initial_credits)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref d) if d.is_unique_violation() => ApiError::DuplicateEmail,
            other => ApiError::Database(other),
        })
    }

    pub async fn find_by_email(db: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Adjust the credit balance by `delta` and return the new balance.
    ///
    /// The balance guard lives inside the single UPDATE statement, so
    /// concurrent adjustments on the same user serialize at the storage
    /// layer and the balance can never go negative.
    pub async fn adjust_credits(db: &SqlitePool, id: i64, delta: i64) -> Result<i64, ApiError> {
        let balance = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET credits = credits + ?1
            WHERE id = ?2 AND credits + ?1 >= 0
            RETURNING credits
            "#,
        )
        .bind(delta)
        .bind(id)
        .fetch_optional(db)
        .await?;

        match balance {
            Some(b) => Ok(b),
            None => {
                if User::find_by_id(db, id).await?.is_some() {
                    Err(ApiError::InsufficientCredits)
                } else {
                    Err(ApiError::NotFound)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    async fn test_db() -> SqlitePool {
        let state = AppState::fake();
        sqlx::migrate!("./migrations")
            .run(&state.db)
            .await
            .expect("migrations run");
        state.db
    }

    #[tokio::test]
    async fn create_and_find_user() {
        let db = test_db().await;
        let user = User::create(&db, "a@x.com", "hash", 3).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.credits, 3);

        let found = User::find_by_email(&db, "a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(User::find_by_email(&db, "b@x.com").await.unwrap().is_none());
        assert!(User::find_by_id(&db, user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_a_second_row() {
        let db = test_db().await;
        User::create(&db, "a@x.com", "hash", 3).await.unwrap();
        let err = User::create(&db, "a@x.com", "other", 3).await.unwrap_err();
        assert!(matches!(err, ApiError::DuplicateEmail));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("a@x.com")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive_as_stored() {
        let db = test_db().await;
        User::create(&db, "A@x.com", "hash", 3).await.unwrap();
        assert!(User::find_by_email(&db, "a@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn credits_decrement_to_zero_then_fail() {
        let db = test_db().await;
        let user = User::create(&db, "a@x.com", "hash", 3).await.unwrap();

        assert_eq!(User::adjust_credits(&db, user.id, -1).await.unwrap(), 2);
        assert_eq!(User::adjust_credits(&db, user.id, -1).await.unwrap(), 1);
        assert_eq!(User::adjust_credits(&db, user.id, -1).await.unwrap(), 0);

        let err = User::adjust_credits(&db, user.id, -1).await.unwrap_err();
        assert!(matches!(err, ApiError::InsufficientCredits));

        let balance = User::find_by_id(&db, user.id).await.unwrap().unwrap().credits;
        assert_eq!(balance, 0);
    }

    #[tokio::test]
    async fn adjust_credits_on_missing_user_is_not_found() {
        let db = test_db().await;
        let err = User::adjust_credits(&db, 9999, -1).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn concurrent_decrements_never_undercount() {
        let db = test_db().await;
        let user = User::create(&db, "a@x.com", "hash", 3).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let db = db.clone();
            let id = user.id;
            handles.push(tokio::spawn(async move {
                User::adjust_credits(&db, id, -1).await
            }));
        }

        let mut ok = 0;
        let mut insufficient = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => ok += 1,
                Err(ApiError::InsufficientCredits) => insufficient += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 3);
        assert_eq!(insufficient, 5);

        let balance = User::find_by_id(&db, user.id).await.unwrap().unwrap().credits;
        assert_eq!(balance, 0);
    }
}
