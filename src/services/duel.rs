use rand::Rng;
use thiserror::Error;

use crate::database::models::MathDuel;

/// Duel operands are random 3-digit numbers.
pub const OPERAND_MIN: i64 = 100;
pub const OPERAND_MAX: i64 = 999;

/// How long the loser is muted after a duel resolves.
pub const MUTE_MINUTES: i64 = 10;

#[derive(Debug, Error)]
pub enum DuelError {
    #[error("you cannot challenge yourself")]
    SelfChallenge,
    #[error("there is already an active duel between these two users in this chat")]
    DuplicateActive,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result of feeding a numeric chat message into the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No unresolved duel involves this user in this chat. Also returned to
    /// the participant who lost the race to an already-resolved duel.
    NoActiveChallenge,
    /// Wrong value; no state change, the handler stays silent.
    Ignored,
    Resolved { winner_id: i64, loser_id: i64 },
}

/// Creates a pending duel between two users in a chat.
///
/// The unordered-pair uniqueness is checked before the insert and also
/// enforced by a partial unique index, so a concurrent duplicate create
/// surfaces as `DuplicateActive` rather than a raw database error.
pub async fn challenge(
    pool: &sqlx::SqlitePool,
    chat_id: i64,
    challenger_id: i64,
    opponent_id: i64,
) -> Result<MathDuel, DuelError> {
    if challenger_id == opponent_id {
        return Err(DuelError::SelfChallenge);
    }

    if MathDuel::find_active_for_pair(pool, chat_id, challenger_id, opponent_id)
        .await?
        .is_some()
    {
        return Err(DuelError::DuplicateActive);
    }

    let (operand_a, operand_b) = {
        let mut rng = rand::thread_rng();
        (
            rng.gen_range(OPERAND_MIN..=OPERAND_MAX),
            rng.gen_range(OPERAND_MIN..=OPERAND_MAX),
        )
    };

    match MathDuel::create(pool, chat_id, challenger_id, opponent_id, operand_a, operand_b).await {
        Ok(duel) => Ok(duel),
        Err(e) if is_unique_violation(&e) => Err(DuelError::DuplicateActive),
        Err(e) => Err(e.into()),
    }
}

/// Feeds a numeric answer from `user_id` into the chat's duel, if any.
///
/// Only the first correct answer wins: the transition is a conditional update
/// guarded by `resolved = 0`, never read-then-write, so two concurrent correct
/// answers resolve the duel exactly once.
pub async fn submit_answer(
    pool: &sqlx::SqlitePool,
    chat_id: i64,
    user_id: i64,
    value: i64,
) -> Result<AnswerOutcome, sqlx::Error> {
    let duel = match MathDuel::find_active_for_user(pool, chat_id, user_id).await? {
        Some(duel) => duel,
        None => return Ok(AnswerOutcome::NoActiveChallenge),
    };

    if value != duel.expected_sum {
        return Ok(AnswerOutcome::Ignored);
    }

    if !MathDuel::try_resolve(pool, &duel.id, user_id).await? {
        // The other participant answered first between our read and the update
        return Ok(AnswerOutcome::NoActiveChallenge);
    }

    let loser_id = if user_id == duel.challenger_id {
        duel.opponent_id
    } else {
        duel.challenger_id
    };

    Ok(AnswerOutcome::Resolved {
        winner_id: user_id,
        loser_id,
    })
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.message().contains("UNIQUE constraint failed"))
}
