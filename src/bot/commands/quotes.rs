use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Quote;
use crate::utils::markdown::escape_markdown;
use crate::utils::validation::validate_quote_text;

/// `/quote`, sent as a reply - saves the replied-to message text.
pub async fn handle_quote(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let quoter = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };
    let original = match msg.reply_to_message() {
        Some(original) => original,
        None => {
            bot.send_message(msg.chat.id, "📝 Reply to the message you want to quote.")
                .await?;
            return Ok(());
        }
    };

    let text = original.text().or_else(|| original.caption()).unwrap_or("");
    if let Err(e) = validate_quote_text(text) {
        bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
        return Ok(());
    }

    let (author_user_id, author_name) = match original.from() {
        Some(author) => (author.id.0 as i64, Some(author.full_name())),
        None => (0, None),
    };

    let quote = Quote::create(
        &db.pool,
        msg.chat.id.0,
        author_user_id,
        author_name,
        quoter.id.0 as i64,
        text.trim().to_string(),
    )
    .await?;
    tracing::info!("Quote {} saved in chat {}", quote.id, msg.chat.id);

    let display_author = quote.author_name.as_deref().unwrap_or("an unknown author");
    bot.send_message(
        msg.chat.id,
        format!("📝 Quote saved from *{}*\\.", escape_markdown(display_author)),
    )
    .parse_mode(ParseMode::MarkdownV2)
    .await?;

    Ok(())
}

/// `/wisdom` - replays a random saved quote from this chat.
pub async fn handle_wisdom(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let quote = match Quote::random_for_chat(&db.pool, msg.chat.id.0).await? {
        Some(quote) => quote,
        None => {
            bot.send_message(msg.chat.id, "🤷 No saved quotes in this chat yet.")
                .await?;
            return Ok(());
        }
    };

    let author = quote.author_name.as_deref().unwrap_or("Unknown");
    let text = format!(
        "🧠 *{}*:\n«{}»",
        escape_markdown(author),
        escape_markdown(&quote.text)
    );
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}
