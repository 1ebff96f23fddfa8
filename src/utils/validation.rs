use anyhow::{anyhow, Result};

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs can be:
    // - Group chats: small negative numbers like -12345
    // - Supergroups: very large negative numbers starting around -1000000000000
    // Reject extremely large negative numbers beyond Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Parses a chat message as a duel answer.
///
/// Only digit-only messages count; everything else is not an answer and the
/// caller drops it silently. Values too large for i64 are not answers either.
pub fn parse_duel_answer(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<i64>().ok()
}

pub fn validate_quote_text(text: &str) -> Result<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("The quoted message has no text"));
    }

    if text.len() > 4000 {
        return Err(anyhow!("Quote is too long to save"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_telegram_chat_id_valid() {
        // Private chat (positive)
        assert!(validate_telegram_chat_id(12345).is_ok());
        assert!(validate_telegram_chat_id(987654321).is_ok());

        // Group chat (negative)
        assert!(validate_telegram_chat_id(-12345).is_ok());

        // Super group (very negative)
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_invalid() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3000000000000).is_err());
        assert!(validate_telegram_chat_id(3000000000).is_err());
    }

    #[test]
    fn test_parse_duel_answer_digits() {
        assert_eq!(parse_duel_answer("1000"), Some(1000));
        assert_eq!(parse_duel_answer("  347 "), Some(347));
        assert_eq!(parse_duel_answer("0"), Some(0));
    }

    #[test]
    fn test_parse_duel_answer_rejects_non_digits() {
        assert_eq!(parse_duel_answer(""), None);
        assert_eq!(parse_duel_answer("   "), None);
        assert_eq!(parse_duel_answer("one thousand"), None);
        assert_eq!(parse_duel_answer("1000!"), None);
        assert_eq!(parse_duel_answer("-5"), None);
        assert_eq!(parse_duel_answer("12.5"), None);
        assert_eq!(parse_duel_answer("1 000"), None);
    }

    #[test]
    fn test_parse_duel_answer_overflow() {
        assert_eq!(parse_duel_answer("99999999999999999999999999"), None);
    }

    #[test]
    fn test_validate_quote_text() {
        assert!(validate_quote_text("a memorable line").is_ok());
        assert!(validate_quote_text("").is_err());
        assert!(validate_quote_text("   ").is_err());
        assert!(validate_quote_text(&"a".repeat(4001)).is_err());
    }
}
