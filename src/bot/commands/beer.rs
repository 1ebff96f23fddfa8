use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::BeerStat;
use crate::utils::markdown::user_mention;

/// `/beer`, sent as a reply - pours one beer for the replied-to user.
pub async fn handle_beer(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let target = match msg.reply_to_message().and_then(|m| m.from()) {
        Some(user) => user,
        None => {
            bot.send_message(
                msg.chat.id,
                "🍺 Reply to the message of the person you are pouring for.",
            )
            .await?;
            return Ok(());
        }
    };

    let target_id = target.id.0 as i64;
    let count = BeerStat::pour(
        &db.pool,
        msg.chat.id.0,
        target_id,
        Some(target.full_name()),
    )
    .await?;

    let text = format!(
        "🍻 A beer poured for {}\\! Total: {}\\.",
        user_mention(target_id, &target.full_name()),
        count
    );
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}

/// `/beerstats` - per-chat leaderboard, most beers first.
pub async fn handle_beer_stats(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let stats = BeerStat::top_for_chat(&db.pool, msg.chat.id.0).await?;
    if stats.is_empty() {
        bot.send_message(msg.chat.id, "🍺 Nobody has been poured a beer here yet.")
            .await?;
        return Ok(());
    }

    let mut lines = vec!["🍺 Beer leaderboard:".to_string(), String::new()];
    for (i, stat) in stats.iter().enumerate() {
        let display = stat
            .username
            .clone()
            .unwrap_or_else(|| format!("id:{}", stat.user_id));
        lines.push(format!("{}. {} - {}", i + 1, display, stat.count));
    }

    bot.send_message(msg.chat.id, lines.join("\n")).await?;

    Ok(())
}
