use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-chat beer counter. `username` is the last known display name of the
/// recipient, refreshed on every pour.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BeerStat {
    pub id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub count: i64,
    pub updated_at: String,
}

impl BeerStat {
    pub async fn find(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, BeerStat>(
            "SELECT id, chat_id, user_id, username, count, updated_at
             FROM beer_stats WHERE chat_id = ? AND user_id = ?",
        )
        .bind(chat_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Adds one beer for the user, creating the counter on first pour.
    /// Returns the new total.
    pub async fn pour(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        user_id: i64,
        username: Option<String>,
    ) -> Result<i64, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        match Self::find(pool, chat_id, user_id).await? {
            Some(stat) => {
                sqlx::query(
                    "UPDATE beer_stats SET count = count + 1, username = ?, updated_at = ?
                     WHERE chat_id = ? AND user_id = ?",
                )
                .bind(&username)
                .bind(&now)
                .bind(chat_id)
                .bind(user_id)
                .execute(pool)
                .await?;

                Ok(stat.count + 1)
            }
            None => {
                sqlx::query(
                    "INSERT INTO beer_stats (chat_id, user_id, username, count, updated_at)
                     VALUES (?, ?, ?, 1, ?)",
                )
                .bind(chat_id)
                .bind(user_id)
                .bind(&username)
                .bind(&now)
                .execute(pool)
                .await?;

                Ok(1)
            }
        }
    }

    pub async fn top_for_chat(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, BeerStat>(
            "SELECT id, chat_id, user_id, username, count, updated_at
             FROM beer_stats WHERE chat_id = ? ORDER BY count DESC, updated_at",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await
    }
}
