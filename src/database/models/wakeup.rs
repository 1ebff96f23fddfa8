use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled one-shot wakeup call. Pending -> fired is one-way; rows are
/// never deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Wakeup {
    pub id: String,
    pub chat_id: i64,
    pub user_id: i64,
    pub fire_at: String,
    pub fired: bool,
    pub created_at: String,
}

impl Wakeup {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        user_id: i64,
        fire_at: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let fire_at_str = fire_at.to_rfc3339();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO wakeups (id, chat_id, user_id, fire_at, fired, created_at)
             VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(chat_id)
        .bind(user_id)
        .bind(&fire_at_str)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(Wakeup {
            id,
            chat_id,
            user_id,
            fire_at: fire_at_str,
            fired: false,
            created_at,
        })
    }

    /// All pending wakeups due at or before `now`, oldest first.
    pub async fn find_due(
        pool: &sqlx::SqlitePool,
        now: DateTime<Utc>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Wakeup>(
            "SELECT id, chat_id, user_id, fire_at, fired, created_at
             FROM wakeups
             WHERE fired = 0 AND fire_at <= ?
             ORDER BY fire_at",
        )
        .bind(now.to_rfc3339())
        .fetch_all(pool)
        .await
    }

    /// Terminal transition; firing an already-fired wakeup is a no-op.
    pub async fn mark_fired(pool: &sqlx::SqlitePool, wakeup_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE wakeups SET fired = 1 WHERE id = ?")
            .bind(wakeup_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        wakeup_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Wakeup>(
            "SELECT id, chat_id, user_id, fire_at, fired, created_at FROM wakeups WHERE id = ?",
        )
        .bind(wakeup_id)
        .fetch_optional(pool)
        .await
    }
}
