//! # Orgkom Bot
//!
//! A Telegram bot for an organizing committee chat: math duels, scheduled
//! wakeup calls, roulette, quotes and beer statistics.
//!
//! ## Features
//! - Math duels: first correct answer wins, the loser is muted for 10 minutes
//! - Wakeup calls scheduled with `/wake DD.MM.YYYY HH:MM`, fired by a
//!   30-second polling scheduler
//! - Roulette with a one-in-six chance of a self-mute
//! - Saved chat quotes and per-chat beer counters
//! - Persistent storage with SQLite

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Background services: duel resolution, wakeup scheduler, health checks
pub mod services;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
