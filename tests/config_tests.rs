use orgkom_bot::config::Config;
use std::env;

// Environment variables are process-global, so all config assertions live in
// one test function to keep them from racing each other.
#[test]
fn test_config_from_env() {
    // Missing token
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
    assert!(Config::from_env().is_err());

    // Blank token is as good as missing
    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    // Token set, defaults for the rest
    env::set_var("TELEGRAM_BOT_TOKEN", "123456:TEST-TOKEN");
    let config = Config::from_env().unwrap();
    assert_eq!(config.telegram_bot_token, "123456:TEST-TOKEN");
    assert_eq!(config.database_url, "sqlite:./data/orgkom.db");
    assert_eq!(config.http_port, 3000);

    // Explicit values win
    env::set_var("DATABASE_URL", "sqlite:./custom.db");
    env::set_var("HTTP_PORT", "8080");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./custom.db");
    assert_eq!(config.http_port, 8080);

    // Blank database url falls back to the default
    env::set_var("DATABASE_URL", "  ");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/orgkom.db");

    // Garbage port is rejected
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(Config::from_env().is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
}
