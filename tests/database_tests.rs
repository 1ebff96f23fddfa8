use anyhow::Result;
use orgkom_bot::database::connection::DatabaseManager;
use orgkom_bot::database::models::*;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

#[tokio::test]
async fn test_chat_registration_and_retrieval() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -1001234567890i64;

    let chat = Chat::upsert_kind(
        &db.pool,
        chat_id,
        CHAT_KIND_ORGANIZERS,
        Some("Orgkom".to_string()),
    )
    .await?;
    assert_eq!(chat.telegram_chat_id, chat_id);
    assert_eq!(chat.kind, CHAT_KIND_ORGANIZERS);
    assert!(chat.is_organizers());
    assert_eq!(chat.title.as_deref(), Some("Orgkom"));

    let found = Chat::find_by_chat_id(&db.pool, chat_id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, chat.id);

    Ok(())
}

#[tokio::test]
async fn test_chat_upsert_changes_kind_in_place() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -42i64;

    let first = Chat::upsert_kind(&db.pool, chat_id, CHAT_KIND_PARTICIPANTS, None).await?;
    let second = Chat::upsert_kind(
        &db.pool,
        chat_id,
        CHAT_KIND_ORGANIZERS,
        Some("Renamed".to_string()),
    )
    .await?;

    // Same row, new kind; no duplicate registration
    assert_eq!(first.id, second.id);
    assert!(second.is_organizers());
    assert_eq!(second.title.as_deref(), Some("Renamed"));

    Ok(())
}

#[tokio::test]
async fn test_chat_not_found() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let result = Chat::find_by_chat_id(&db.pool, 99999).await?;
    assert!(result.is_none());

    Ok(())
}

#[tokio::test]
async fn test_quote_creation_and_random_pick() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = 555i64;

    let quote = Quote::create(
        &db.pool,
        chat_id,
        10,
        Some("Ivan".to_string()),
        20,
        "we will fix it in production".to_string(),
    )
    .await?;
    assert!(!quote.id.is_empty());
    assert_eq!(quote.chat_id, chat_id);
    assert_eq!(quote.author_user_id, 10);
    assert_eq!(quote.quoter_user_id, 20);

    assert_eq!(Quote::count_for_chat(&db.pool, chat_id).await?, 1);

    let picked = Quote::random_for_chat(&db.pool, chat_id).await?;
    assert!(picked.is_some());
    assert_eq!(picked.unwrap().id, quote.id);

    Ok(())
}

#[tokio::test]
async fn test_random_quote_is_scoped_to_chat() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    Quote::create(&db.pool, 1, 10, None, 20, "chat one".to_string()).await?;

    let other_chat = Quote::random_for_chat(&db.pool, 2).await?;
    assert!(other_chat.is_none());
    assert_eq!(Quote::count_for_chat(&db.pool, 2).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_beer_pour_increments_counter() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = 777i64;

    let first = BeerStat::pour(&db.pool, chat_id, 10, Some("ivan".to_string())).await?;
    assert_eq!(first, 1);

    let second = BeerStat::pour(&db.pool, chat_id, 10, Some("ivan".to_string())).await?;
    assert_eq!(second, 2);

    let stat = BeerStat::find(&db.pool, chat_id, 10).await?;
    assert!(stat.is_some());
    assert_eq!(stat.unwrap().count, 2);

    Ok(())
}

#[tokio::test]
async fn test_beer_pour_refreshes_username() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = 777i64;

    BeerStat::pour(&db.pool, chat_id, 10, Some("old name".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 10, Some("new name".to_string())).await?;

    let stat = BeerStat::find(&db.pool, chat_id, 10).await?;
    assert_eq!(stat.unwrap().username.as_deref(), Some("new name"));

    Ok(())
}

#[tokio::test]
async fn test_beer_leaderboard_ordering() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = 888i64;

    BeerStat::pour(&db.pool, chat_id, 1, Some("one".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 2, Some("two".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 2, Some("two".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 3, Some("three".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 3, Some("three".to_string())).await?;
    BeerStat::pour(&db.pool, chat_id, 3, Some("three".to_string())).await?;

    let top = BeerStat::top_for_chat(&db.pool, chat_id).await?;
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].user_id, 3);
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].user_id, 2);
    assert_eq!(top[2].user_id, 1);

    Ok(())
}

#[tokio::test]
async fn test_beer_counters_are_per_chat() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    BeerStat::pour(&db.pool, 1, 10, None).await?;
    BeerStat::pour(&db.pool, 2, 10, None).await?;
    BeerStat::pour(&db.pool, 2, 10, None).await?;

    assert_eq!(BeerStat::find(&db.pool, 1, 10).await?.unwrap().count, 1);
    assert_eq!(BeerStat::find(&db.pool, 2, 10).await?.unwrap().count, 2);

    Ok(())
}
