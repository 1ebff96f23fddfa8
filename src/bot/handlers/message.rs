use rand::Rng;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::HandlerResult;
use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "👋 Hi! I'm the orgkom bot.\n\nUse /duel to challenge someone, /wake to schedule a wakeup call, /roulette if you feel lucky.\nUse /help to see all commands.",
            )
            .await?;
        }
        Command::Duel => {
            crate::bot::commands::duel::handle_duel(bot, msg, &db).await?;
        }
        Command::Wake { when } => {
            crate::bot::commands::wake::handle_wake(bot, msg, when, &db).await?;
        }
        Command::Roulette => {
            crate::bot::commands::roulette::handle_roulette(bot, msg).await?;
        }
        Command::Quote => {
            crate::bot::commands::quotes::handle_quote(bot, msg, &db).await?;
        }
        Command::Wisdom => {
            crate::bot::commands::quotes::handle_wisdom(bot, msg, &db).await?;
        }
        Command::Beer => {
            crate::bot::commands::beer::handle_beer(bot, msg, &db).await?;
        }
        Command::BeerStats => {
            crate::bot::commands::beer::handle_beer_stats(bot, msg, &db).await?;
        }
        Command::Probability { event } => {
            let chance = rand::thread_rng().gen_range(0..=100);
            let event = event.trim().to_string();
            let text = if event.is_empty() {
                format!("📊 Probability: {chance}%")
            } else {
                format!("📊 The probability of \"{event}\": {chance}%")
            };
            bot.send_message(msg.chat.id, text).await?;
        }
        Command::Setup => {
            crate::bot::commands::setup::handle_setup(bot, msg).await?;
        }
        Command::ChatInfo => {
            crate::bot::commands::setup::handle_chat_info(bot, msg, &db).await?;
        }
    }
    Ok(())
}
