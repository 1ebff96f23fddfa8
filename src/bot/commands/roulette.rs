use chrono::{Duration, Utc};
use rand::Rng;
use teloxide::prelude::*;
use teloxide::types::{ChatPermissions, ParseMode};

use crate::bot::handlers::HandlerResult;
use crate::utils::markdown::user_mention;

const CHAMBERS: i32 = 6;
const ROULETTE_MUTE_MINUTES: i64 = 10;

/// `/roulette` - one chamber in six carries a 10 minute mute.
pub async fn handle_roulette(bot: Bot, msg: Message) -> HandlerResult {
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let chamber = rand::thread_rng().gen_range(1..=CHAMBERS);
    if chamber != 1 {
        bot.send_message(msg.chat.id, "🎉 Lucky! The round was in another chamber.")
            .await?;
        return Ok(());
    }

    let until = Utc::now() + Duration::minutes(ROULETTE_MUTE_MINUTES);
    match bot
        .restrict_chat_member(msg.chat.id, user.id, ChatPermissions::empty())
        .until_date(until)
        .await
    {
        Ok(_) => {
            let text = format!(
                "🔫 Bang\\! {} is muted for {} minutes\\.",
                user_mention(user.id.0 as i64, &user.full_name()),
                ROULETTE_MUTE_MINUTES
            );
            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(e) => {
            tracing::warn!("Failed to mute user {} in chat {}: {}", user.id, msg.chat.id, e);
            bot.send_message(
                msg.chat.id,
                "❌ Could not apply the mute (is the bot an admin here?).",
            )
            .await?;
        }
    }

    Ok(())
}
