use chrono::Utc;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode, Bot};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::connection::DatabaseManager;
use crate::database::models::Wakeup;
use crate::utils::markdown::user_mention;

/// Fixed poll interval. The store has no change notification, so the service
/// scans for due wakeups on a timer instead of reacting to writes.
const POLL_SCHEDULE: &str = "*/30 * * * * *";

pub struct WakeupService {
    bot: Bot,
    db: Arc<DatabaseManager>,
    scheduler: JobScheduler,
}

impl WakeupService {
    pub async fn new(
        bot: Bot,
        db: Arc<DatabaseManager>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self { bot, db, scheduler })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let db = self.db.clone();

        let wakeup_job = Job::new_async(POLL_SCHEDULE, move |_uuid, _l| {
            let bot = bot.clone();
            let db = db.clone();
            Box::pin(async move {
                if let Err(e) = fire_due_wakeups(bot, db).await {
                    tracing::error!("Wakeup pass failed: {}", e);
                }
            })
        })?;

        self.scheduler.add(wakeup_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Wakeup service started - polling every 30 seconds");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn check_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        fire_due_wakeups(self.bot.clone(), self.db.clone()).await
    }
}

/// One scheduler pass: deliver every due wakeup, then retire it.
///
/// Each wakeup gets at most one delivery attempt. A failed send is logged and
/// the row is still marked fired; marking happens per row, right after the
/// attempt, so a crash mid-pass cannot re-deliver already-sent wakeups.
async fn fire_due_wakeups(
    bot: Bot,
    db: Arc<DatabaseManager>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let due = Wakeup::find_due(&db.pool, Utc::now()).await?;

    for wakeup in due {
        let text = format!(
            "⏰ Time to get up, {}\\!",
            user_mention(wakeup.user_id, "you")
        );

        if let Err(e) = bot
            .send_message(ChatId(wakeup.chat_id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            tracing::error!(
                "Failed to deliver wakeup {} to chat {}: {}",
                wakeup.id,
                wakeup.chat_id,
                e
            );
        }

        Wakeup::mark_fired(&db.pool, &wakeup.id).await?;
        tracing::info!(
            "Wakeup {} for user {} in chat {} fired (was due {})",
            wakeup.id,
            wakeup.user_id,
            wakeup.chat_id,
            wakeup.fire_at
        );
    }

    Ok(())
}
