use chrono::{Duration, Utc};
use teloxide::prelude::*;
use teloxide::types::{ChatPermissions, ParseMode, UserId};

use super::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::services::duel::{self, AnswerOutcome, MUTE_MINUTES};
use crate::utils::markdown::user_mention;
use crate::utils::validation::parse_duel_answer;

/// Routes digit-only chat messages into the duel resolver.
///
/// Anything that is not a plain number is ignored, and so are numbers from
/// users without an active duel - stray digits in chat never produce a reply.
pub async fn plain_message_handler(bot: Bot, msg: Message, db: DatabaseManager) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };
    let value = match parse_duel_answer(text) {
        Some(value) => value,
        None => return Ok(()),
    };
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let chat_id = msg.chat.id.0;
    let user_id = user.id.0 as i64;

    match duel::submit_answer(&db.pool, chat_id, user_id, value).await? {
        AnswerOutcome::Resolved {
            winner_id,
            loser_id,
        } => {
            tracing::info!(
                "Duel resolved in chat {}: winner {}, loser {}",
                chat_id,
                winner_id,
                loser_id
            );
            announce_and_mute(&bot, &msg, winner_id, loser_id, &user.full_name()).await;
        }
        // Silent by design: wrong answers and bystander digits produce no reply
        AnswerOutcome::Ignored | AnswerOutcome::NoActiveChallenge => {}
    }

    Ok(())
}

/// Delivery side of a resolved duel. The state transition has already
/// committed; send or restrict failures are logged and swallowed.
async fn announce_and_mute(bot: &Bot, msg: &Message, winner_id: i64, loser_id: i64, winner_name: &str) {
    let loser_name = match bot
        .get_chat_member(msg.chat.id, UserId(loser_id as u64))
        .await
    {
        Ok(member) => member.user.full_name(),
        Err(e) => {
            tracing::warn!("Failed to look up duel loser {}: {}", loser_id, e);
            "the opponent".to_string()
        }
    };

    let until = Utc::now() + Duration::minutes(MUTE_MINUTES);
    if let Err(e) = bot
        .restrict_chat_member(msg.chat.id, UserId(loser_id as u64), ChatPermissions::empty())
        .until_date(until)
        .await
    {
        tracing::error!(
            "Failed to mute duel loser {} in chat {}: {}",
            loser_id,
            msg.chat.id,
            e
        );
    }

    let text = format!(
        "🏆 {} wins the duel\\! {} is muted for {} minutes\\.",
        user_mention(winner_id, winner_name),
        user_mention(loser_id, &loser_name),
        MUTE_MINUTES
    );
    if let Err(e) = bot
        .send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        tracing::error!("Failed to announce duel result in chat {}: {}", msg.chat.id, e);
    }
}
