#![allow(clippy::unwrap_used)]

use chrono::{Duration, Utc};
use orgkom_bot::database::connection::DatabaseManager;
use orgkom_bot::database::models::Wakeup;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> (DatabaseManager, TempDir) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.to_string_lossy());

    let db = DatabaseManager::new(&db_url).await.unwrap();
    db.run_migrations().await.unwrap();
    (db, dir)
}

#[tokio::test]
async fn test_wakeup_creation() {
    let (db, _temp_dir) = setup_test_db().await;

    let fire_at = Utc::now() + Duration::hours(2);
    let wakeup = Wakeup::create(&db.pool, 100, 7, fire_at).await.unwrap();

    assert_eq!(wakeup.chat_id, 100);
    assert_eq!(wakeup.user_id, 7);
    assert!(!wakeup.fired);
    assert!(!wakeup.id.is_empty());
    assert!(!wakeup.created_at.is_empty());

    let parsed = chrono::DateTime::parse_from_rfc3339(&wakeup.fire_at).unwrap();
    assert_eq!(parsed.timestamp(), fire_at.timestamp());
}

#[tokio::test]
async fn test_past_wakeup_is_due() {
    let (db, _temp_dir) = setup_test_db().await;

    let wakeup = Wakeup::create(&db.pool, 100, 7, Utc::now() - Duration::hours(1))
        .await
        .unwrap();

    let due = Wakeup::find_due(&db.pool, Utc::now()).await.unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, wakeup.id);
}

#[tokio::test]
async fn test_future_wakeup_is_not_due() {
    let (db, _temp_dir) = setup_test_db().await;

    Wakeup::create(&db.pool, 100, 7, Utc::now() + Duration::hours(1))
        .await
        .unwrap();

    let due = Wakeup::find_due(&db.pool, Utc::now()).await.unwrap();
    assert!(due.is_empty());
}

#[tokio::test]
async fn test_due_exactly_at_fire_time() {
    let (db, _temp_dir) = setup_test_db().await;

    let now = Utc::now();
    Wakeup::create(&db.pool, 100, 7, now).await.unwrap();

    let due = Wakeup::find_due(&db.pool, now).await.unwrap();
    assert_eq!(due.len(), 1);
}

#[tokio::test]
async fn test_due_wakeups_ordered_oldest_first() {
    let (db, _temp_dir) = setup_test_db().await;

    let newer = Wakeup::create(&db.pool, 100, 7, Utc::now() - Duration::minutes(5))
        .await
        .unwrap();
    let older = Wakeup::create(&db.pool, 100, 8, Utc::now() - Duration::hours(3))
        .await
        .unwrap();

    let due = Wakeup::find_due(&db.pool, Utc::now()).await.unwrap();
    assert_eq!(due.len(), 2);
    assert_eq!(due[0].id, older.id);
    assert_eq!(due[1].id, newer.id);
}

#[tokio::test]
async fn test_fired_is_terminal() {
    let (db, _temp_dir) = setup_test_db().await;

    let wakeup = Wakeup::create(&db.pool, 100, 7, Utc::now() - Duration::hours(1))
        .await
        .unwrap();

    Wakeup::mark_fired(&db.pool, &wakeup.id).await.unwrap();

    // A fired wakeup never comes back on later passes
    let due = Wakeup::find_due(&db.pool, Utc::now()).await.unwrap();
    assert!(due.is_empty());

    let stored = Wakeup::find_by_id(&db.pool, &wakeup.id).await.unwrap().unwrap();
    assert!(stored.fired);

    // Marking again is a harmless no-op
    Wakeup::mark_fired(&db.pool, &wakeup.id).await.unwrap();
    let stored = Wakeup::find_by_id(&db.pool, &wakeup.id).await.unwrap().unwrap();
    assert!(stored.fired);
}

#[tokio::test]
async fn test_firing_one_leaves_the_rest_pending() {
    let (db, _temp_dir) = setup_test_db().await;

    let first = Wakeup::create(&db.pool, 100, 7, Utc::now() - Duration::hours(2))
        .await
        .unwrap();
    let second = Wakeup::create(&db.pool, 100, 8, Utc::now() - Duration::hours(1))
        .await
        .unwrap();

    Wakeup::mark_fired(&db.pool, &first.id).await.unwrap();

    let due = Wakeup::find_due(&db.pool, Utc::now()).await.unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, second.id);
}
