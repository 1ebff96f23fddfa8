use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Wakeup;
use crate::utils::datetime::{format_wake_datetime, parse_wake_datetime};
use crate::utils::markdown::{escape_markdown, user_mention};

/// `/wake DD.MM.YYYY HH:MM` - schedules a one-shot wakeup call in this chat.
///
/// Times in the past are accepted; the scheduler fires them on its next pass.
pub async fn handle_wake(bot: Bot, msg: Message, when: String, db: &DatabaseManager) -> HandlerResult {
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let fire_at = match parse_wake_datetime(&when) {
        Ok(fire_at) => fire_at,
        Err(e) => {
            bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
            return Ok(());
        }
    };

    let user_id = user.id.0 as i64;
    let wakeup = Wakeup::create(&db.pool, msg.chat.id.0, user_id, fire_at).await?;
    tracing::info!(
        "Wakeup {} scheduled for user {} in chat {} at {}",
        wakeup.id,
        user_id,
        msg.chat.id,
        wakeup.fire_at
    );

    let text = format!(
        "⏰ Ok\\! I will wake {} at {} UTC\\.",
        user_mention(user_id, &user.full_name()),
        escape_markdown(&format_wake_datetime(&fire_at))
    );
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}
