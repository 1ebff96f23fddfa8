pub mod beer;
pub mod duel;
pub mod quotes;
pub mod roulette;
pub mod setup;
pub mod wake;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Orgkom bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Challenge someone to a math duel (reply to their message)")]
    Duel,
    #[command(description = "Schedule a wakeup call: /wake 17.11.2025 11:00")]
    Wake { when: String },
    #[command(description = "One-in-six chance of a 10 minute mute")]
    Roulette,
    #[command(description = "Save the replied-to message as a quote")]
    Quote,
    #[command(description = "Show a random saved quote")]
    Wisdom,
    #[command(description = "Pour a beer for someone (reply to their message)")]
    Beer,
    #[command(description = "Show the beer leaderboard")]
    BeerStats,
    #[command(description = "Estimate the probability of an event")]
    Probability { event: String },
    #[command(description = "Configure the chat type (admins only)")]
    Setup,
    #[command(description = "Show chat registration info (admins only)")]
    ChatInfo,
}
