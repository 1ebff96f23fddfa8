use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::services::duel::{self, DuelError, MUTE_MINUTES};
use crate::utils::markdown::user_mention;

/// `/duel`, sent as a reply to the opponent's message.
pub async fn handle_duel(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let challenger = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };
    let opponent = match msg.reply_to_message().and_then(|m| m.from()) {
        Some(user) => user,
        None => {
            bot.send_message(
                msg.chat.id,
                "🤺 Reply to the message of the person you want to duel.",
            )
            .await?;
            return Ok(());
        }
    };

    if opponent.is_bot {
        bot.send_message(msg.chat.id, "🤖 Bots don't do mental arithmetic.")
            .await?;
        return Ok(());
    }

    let chat_id = msg.chat.id.0;
    let challenger_id = challenger.id.0 as i64;
    let opponent_id = opponent.id.0 as i64;

    tracing::info!(
        "Duel command by user {} against {} in chat {}",
        challenger_id,
        opponent_id,
        chat_id
    );

    match duel::challenge(&db.pool, chat_id, challenger_id, opponent_id).await {
        Ok(created) => {
            let text = format!(
                "🤺 {} challenges {} to a math duel\\!\n\nFirst correct answer wins, the loser is muted for {} minutes\\.\nWhat is *{} \\+ {}*?",
                user_mention(challenger_id, &challenger.full_name()),
                user_mention(opponent_id, &opponent.full_name()),
                MUTE_MINUTES,
                created.operand_a,
                created.operand_b
            );
            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(DuelError::SelfChallenge) => {
            bot.send_message(msg.chat.id, "🪞 You cannot duel yourself.")
                .await?;
        }
        Err(DuelError::DuplicateActive) => {
            bot.send_message(
                msg.chat.id,
                "⚔️ There is already an active duel between you two in this chat. Answer it first.",
            )
            .await?;
        }
        Err(DuelError::Database(e)) => return Err(e.into()),
    }

    Ok(())
}
