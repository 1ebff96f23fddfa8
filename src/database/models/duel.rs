use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A math duel between two chat members. Rows are never deleted; resolved
/// duels stay as an audit trail.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MathDuel {
    pub id: String,
    pub chat_id: i64,
    pub challenger_id: i64,
    pub opponent_id: i64,
    pub operand_a: i64,
    pub operand_b: i64,
    pub expected_sum: i64,
    pub winner_id: Option<i64>,
    pub resolved: bool,
    pub created_at: String,
}

impl MathDuel {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        challenger_id: i64,
        opponent_id: i64,
        operand_a: i64,
        operand_b: i64,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let expected_sum = operand_a + operand_b;
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO duels (id, chat_id, challenger_id, opponent_id, operand_a, operand_b, expected_sum, resolved, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(chat_id)
        .bind(challenger_id)
        .bind(opponent_id)
        .bind(operand_a)
        .bind(operand_b)
        .bind(expected_sum)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(MathDuel {
            id,
            chat_id,
            challenger_id,
            opponent_id,
            operand_a,
            operand_b,
            expected_sum,
            winner_id: None,
            resolved: false,
            created_at,
        })
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        duel_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, MathDuel>(
            "SELECT id, chat_id, challenger_id, opponent_id, operand_a, operand_b, expected_sum, winner_id, resolved, created_at
             FROM duels WHERE id = ?",
        )
        .bind(duel_id)
        .fetch_optional(pool)
        .await
    }

    /// The unresolved duel for an unordered pair in a chat, if any.
    pub async fn find_active_for_pair(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        user_a: i64,
        user_b: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, MathDuel>(
            "SELECT id, chat_id, challenger_id, opponent_id, operand_a, operand_b, expected_sum, winner_id, resolved, created_at
             FROM duels
             WHERE chat_id = ? AND resolved = 0
               AND ((challenger_id = ? AND opponent_id = ?) OR (challenger_id = ? AND opponent_id = ?))",
        )
        .bind(chat_id)
        .bind(user_a)
        .bind(user_b)
        .bind(user_b)
        .bind(user_a)
        .fetch_optional(pool)
        .await
    }

    /// The unresolved duel in a chat where `user_id` is a participant, if any.
    pub async fn find_active_for_user(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, MathDuel>(
            "SELECT id, chat_id, challenger_id, opponent_id, operand_a, operand_b, expected_sum, winner_id, resolved, created_at
             FROM duels
             WHERE chat_id = ? AND resolved = 0
               AND (challenger_id = ? OR opponent_id = ?)
             ORDER BY created_at LIMIT 1",
        )
        .bind(chat_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Atomic check-and-set: marks the duel resolved with `winner_id`, but only
    /// if it is still unresolved. Returns false when another answer won the race.
    pub async fn try_resolve(
        pool: &sqlx::SqlitePool,
        duel_id: &str,
        winner_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE duels SET winner_id = ?, resolved = 1 WHERE id = ? AND resolved = 0",
        )
        .bind(winner_id)
        .bind(duel_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
