use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub chat_id: i64,
    pub author_user_id: i64,
    pub author_name: Option<String>,
    pub quoter_user_id: i64,
    pub text: String,
    pub created_at: String,
}

impl Quote {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        author_user_id: i64,
        author_name: Option<String>,
        quoter_user_id: i64,
        text: String,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO quotes (id, chat_id, author_user_id, author_name, quoter_user_id, text, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(chat_id)
        .bind(author_user_id)
        .bind(&author_name)
        .bind(quoter_user_id)
        .bind(&text)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(Quote {
            id,
            chat_id,
            author_user_id,
            author_name,
            quoter_user_id,
            text,
            created_at,
        })
    }

    pub async fn random_for_chat(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Quote>(
            "SELECT id, chat_id, author_user_id, author_name, quoter_user_id, text, created_at
             FROM quotes WHERE chat_id = ? ORDER BY RANDOM() LIMIT 1",
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_for_chat(pool: &sqlx::SqlitePool, chat_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes WHERE chat_id = ?")
            .bind(chat_id)
            .fetch_one(pool)
            .await
    }
}
