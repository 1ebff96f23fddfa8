use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Wakeup timestamps are entered as `17.11.2025 11:00` and interpreted as UTC.
const WAKE_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn parse_wake_datetime(input: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), WAKE_FORMAT)
        .map_err(|_| anyhow!("Expected time format: 17.11.2025 11:00"))?;
    Ok(Utc.from_utc_datetime(&naive))
}

pub fn format_wake_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(WAKE_FORMAT).to_string()
}
