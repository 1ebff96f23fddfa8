use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, CHAT_KIND_ORGANIZERS, CHAT_KIND_PARTICIPANTS};
use crate::utils::datetime::format_wake_datetime;

/// `/setup` - asks chat admins to pick the chat kind via an inline keyboard.
/// The choice is handled by the callback handler.
pub async fn handle_setup(bot: Bot, msg: Message) -> HandlerResult {
    if msg.chat.is_private() {
        bot.send_message(msg.chat.id, "❌ This command only works in group chats.")
            .await?;
        return Ok(());
    }
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let member = bot.get_chat_member(msg.chat.id, user.id).await?;
    if !member.is_privileged() {
        bot.send_message(
            msg.chat.id,
            "❌ Only chat administrators can configure the chat.",
        )
        .await?;
        return Ok(());
    }

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "👥 Participants",
            format!("chat_kind:{CHAT_KIND_PARTICIPANTS}"),
        )],
        vec![InlineKeyboardButton::callback(
            "🎯 Organizers",
            format!("chat_kind:{CHAT_KIND_ORGANIZERS}"),
        )],
    ]);

    bot.send_message(
        msg.chat.id,
        "👋 What kind of chat is this?\n\nPick a type so I know which commands belong here:",
    )
    .reply_markup(keyboard)
    .await?;

    Ok(())
}

/// `/chatinfo` - shows the stored registration for this chat (admins only).
pub async fn handle_chat_info(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    if msg.chat.is_private() {
        bot.send_message(msg.chat.id, "❌ This command only works in group chats.")
            .await?;
        return Ok(());
    }
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let member = bot.get_chat_member(msg.chat.id, user.id).await?;
    if !member.is_privileged() {
        return Ok(());
    }

    let chat = match Chat::find_by_chat_id(&db.pool, msg.chat.id.0).await? {
        Some(chat) => chat,
        None => {
            bot.send_message(
                msg.chat.id,
                "❓ This chat is not configured yet. Run /setup to register it.",
            )
            .await?;
            return Ok(());
        }
    };

    let kind_name = if chat.is_organizers() {
        "Organizers"
    } else {
        "Participants"
    };
    let added = chrono::DateTime::parse_from_rfc3339(&chat.created_at)
        .map(|dt| format_wake_datetime(&dt.with_timezone(&chrono::Utc)))
        .unwrap_or_else(|_| chat.created_at.clone());

    bot.send_message(
        msg.chat.id,
        format!(
            "ℹ️ Chat info\n\n🏷 Title: {}\n🎯 Type: {}\n📅 Registered: {} UTC",
            chat.title.as_deref().unwrap_or("(untitled)"),
            kind_name,
            added
        ),
    )
    .await?;

    Ok(())
}
