use teloxide::prelude::*;

use super::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, CHAT_KIND_ORGANIZERS, CHAT_KIND_PARTICIPANTS};

pub async fn callback_handler(bot: Bot, q: CallbackQuery, db: DatabaseManager) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.as_ref().map_or("unknown", |v| v);
    let chat_id = q.message.as_ref().map(|m| m.chat.id.0).unwrap_or(0);

    if let Some(data) = q.data.clone() {
        tracing::info!(
            "Callback received: '{}' from user {} ({}) in chat {}",
            data,
            username,
            user_id,
            chat_id
        );

        if let Some(kind) = data.strip_prefix("chat_kind:") {
            return handle_chat_kind_callback(bot, q, kind, &db).await;
        }

        bot.answer_callback_query(q.id).text("Unknown action").await?;
    } else {
        bot.answer_callback_query(q.id)
            .text("Invalid callback data format")
            .await?;
    }

    Ok(())
}

async fn handle_chat_kind_callback(
    bot: Bot,
    q: CallbackQuery,
    kind: &str,
    db: &DatabaseManager,
) -> HandlerResult {
    if kind != CHAT_KIND_PARTICIPANTS && kind != CHAT_KIND_ORGANIZERS {
        bot.answer_callback_query(q.id)
            .text("Unknown chat kind")
            .await?;
        return Ok(());
    }

    let message = match q.message {
        Some(message) => message,
        None => {
            bot.answer_callback_query(q.id)
                .text("This keyboard has expired, run /setup again")
                .await?;
            return Ok(());
        }
    };

    // Only chat administrators may pick the chat kind
    let member = bot.get_chat_member(message.chat.id, q.from.id).await?;
    if !member.is_privileged() {
        bot.answer_callback_query(q.id)
            .text("❌ Only chat administrators can choose the chat type!")
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let title = message.chat.title().map(|s| s.to_string());
    let chat = Chat::upsert_kind(&db.pool, message.chat.id.0, kind, title).await?;
    tracing::info!(
        "Chat {} registered as '{}' by user {}",
        chat.telegram_chat_id,
        chat.kind,
        q.from.id
    );

    let response = if chat.is_organizers() {
        "✅ This chat is now configured as an organizers chat."
    } else {
        "✅ This chat is now configured as a participants chat."
    };
    bot.edit_message_text(message.chat.id, message.id, response)
        .await?;
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
