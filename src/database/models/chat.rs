use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Chat kinds stored in `chats.kind`.
pub const CHAT_KIND_PARTICIPANTS: &str = "participants";
pub const CHAT_KIND_ORGANIZERS: &str = "organizers";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub telegram_chat_id: i64,
    pub kind: String,
    pub title: Option<String>,
    pub created_at: String,
}

impl Chat {
    pub async fn find_by_chat_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Chat>(
            "SELECT id, telegram_chat_id, kind, title, created_at FROM chats WHERE telegram_chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await
    }

    /// Registers the chat, or changes its kind if it is already registered.
    pub async fn upsert_kind(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        kind: &str,
        title: Option<String>,
    ) -> Result<Self, sqlx::Error> {
        match Self::find_by_chat_id(pool, chat_id).await? {
            Some(_) => {
                sqlx::query("UPDATE chats SET kind = ?, title = ? WHERE telegram_chat_id = ?")
                    .bind(kind)
                    .bind(&title)
                    .bind(chat_id)
                    .execute(pool)
                    .await?;
            }
            None => {
                let now = Utc::now().to_rfc3339();
                sqlx::query(
                    "INSERT INTO chats (telegram_chat_id, kind, title, created_at) VALUES (?, ?, ?, ?)",
                )
                .bind(chat_id)
                .bind(kind)
                .bind(&title)
                .bind(now)
                .execute(pool)
                .await?;
            }
        }

        Self::find_by_chat_id(pool, chat_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub fn is_organizers(&self) -> bool {
        self.kind == CHAT_KIND_ORGANIZERS
    }
}
