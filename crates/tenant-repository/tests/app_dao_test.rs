//! Integration tests for AppDao.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use tenant_core::{App, TenantError};
use tenant_repository::*;

fn create_test_app(app_id: &str, source: &str) -> App {
    App {
        app_id: app_id.to_string(),
        app_name: format!("{} name", app_id),
        dev_id: 12345,
        channel_id: "channel-456".to_string(),
        source: source.to_string(),
        is_disable: false,
        app_desc: "Test description".to_string(),
        is_delete: false,
        create_time: "2023-01-01 12:00:00".to_string(),
        update_time: "2023-01-01 12:00:00".to_string(),
        extend: r#"{"extra": "data"}"#.to_string(),
    }
}

async fn seed(dao: &AppDao, apps: &[App]) {
    for app in apps {
        let affected = dao.insert(Some(app), None).await.expect("Failed to insert app");
        assert_eq!(affected, 1);
    }
}

#[tokio::test]
async fn test_insert_and_select_round_trip() {
    let db = TestDatabase::new().await;
    let dao = db.dao();

    let app = create_test_app("test-app-123", "admin");
    seed(&dao, std::slice::from_ref(&app)).await;

    let found = dao.select([with_app_id("test-app-123")]).await.expect("Query failed");
    assert_eq!(found, vec![app]);
}

#[tokio::test]
async fn test_insert_duplicate_is_database_error() {
    let db = TestDatabase::new().await;
    let dao = db.dao();

    let app = create_test_app("dup", "admin");
    seed(&dao, std::slice::from_ref(&app)).await;

    let err = dao.insert(Some(&app), None).await.unwrap_err();
    assert!(matches!(err, TenantError::Database(sqlx::Error::Database(_))));
}

#[tokio::test]
async fn test_select_filters() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(
        &dao,
        &[
            create_test_app("A", "admin"),
            create_test_app("B", "admin"),
            create_test_app("C", "portal"),
        ],
    )
    .await;

    let all = dao.select(NO_OPTIONS).await.expect("Query failed");
    assert_eq!(all.len(), 3);

    let admin = dao
        .select([with_app_id("A"), with_source("admin")])
        .await
        .expect("Query failed");
    assert_eq!(admin.len(), 1);
    assert_eq!(admin[0].app_id, "A");

    let listed = dao.select([with_app_ids(["A", "C"])]).await.expect("Query failed");
    let mut ids: Vec<String> = listed.into_iter().map(|app| app.app_id).collect();
    ids.sort();
    assert_eq!(ids, vec!["A", "C"]);

    let excluded = dao.select([with_not_app_id("A")]).await.expect("Query failed");
    assert_eq!(excluded.len(), 2);

    let by_name = dao.select([with_name("B%")]).await.expect("Query failed");
    assert_eq!(by_name.len(), 1);

    let none = dao.select([with_app_id("missing")]).await.expect("Query failed");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_empty_in_list_is_omitted() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(&dao, &[create_test_app("A", "admin"), create_test_app("B", "admin")]).await;

    let found = dao
        .select([with_app_ids(Vec::<String>::new()), Some(with_source("admin"))])
        .await
        .expect("Query failed");
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_update_applies_set_options() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(&dao, &[create_test_app("A", "admin"), create_test_app("B", "admin")]).await;

    let affected = dao
        .update(
            [with_app_id("A")],
            None,
            [with_set_name("renamed"), with_is_disable(true), with_dev_id(7)],
        )
        .await
        .expect("Update failed");
    assert_eq!(affected, 1);

    let updated = dao.select([with_app_id("A")]).await.expect("Query failed");
    assert_eq!(updated[0].app_name, "renamed");
    assert!(updated[0].is_disable);
    assert_eq!(updated[0].dev_id, 7);

    let untouched = dao.select([with_app_id("B")]).await.expect("Query failed");
    assert_eq!(untouched[0].app_name, "B name");
}

#[tokio::test]
async fn test_update_without_set_options_leaves_rows() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(&dao, &[create_test_app("A", "admin")]).await;

    let err = dao.update([with_app_id("A")], None, NO_OPTIONS).await.unwrap_err();
    assert_eq!(err.to_string(), "update content is empty");

    let found = dao.select([with_app_id("A")]).await.expect("Query failed");
    assert_eq!(found[0], create_test_app("A", "admin"));
}

#[tokio::test]
async fn test_delete_is_soft() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(&dao, &[create_test_app("A", "admin"), create_test_app("B", "admin")]).await;

    let affected = dao.delete(None, [with_app_id("A")]).await.expect("Delete failed");
    assert_eq!(affected, 1);

    let found = dao.select([with_app_id("A")]).await.expect("Query failed");
    assert_eq!(found.len(), 1);
    assert!(found[0].is_delete);
    assert_ne!(found[0].update_time, "2023-01-01 12:00:00");

    let live = dao
        .count(false, None, [with_is_delete(false)])
        .await
        .expect("Count failed");
    assert_eq!(live, 1);
}

#[tokio::test]
async fn test_count_plain_and_distinct() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(
        &dao,
        &[
            create_test_app("A", "admin"),
            create_test_app("B", "admin"),
            create_test_app("C", "portal"),
        ],
    )
    .await;

    assert_eq!(dao.count(false, None, NO_OPTIONS).await.expect("Count failed"), 3);
    assert_eq!(dao.count(true, None, NO_OPTIONS).await.expect("Count failed"), 3);
    assert_eq!(
        dao.count(false, None, [with_source("admin")]).await.expect("Count failed"),
        2
    );
    assert_eq!(
        dao.count(false, None, [with_source("nobody")]).await.expect("Count failed"),
        0
    );
}

#[tokio::test]
async fn test_transaction_rollback_discards_writes() {
    let db = TestDatabase::new().await;
    let dao = db.dao();

    let mut tx = dao.begin_tx().await.expect("Failed to begin transaction");
    dao.insert(Some(&create_test_app("A", "admin")), Some(&mut tx))
        .await
        .expect("Insert failed");
    dao.insert(Some(&create_test_app("B", "admin")), Some(&mut tx))
        .await
        .expect("Insert failed");

    let inside = dao.count(false, Some(&mut tx), NO_OPTIONS).await.expect("Count failed");
    assert_eq!(inside, 2);

    tx.rollback().await.expect("Rollback failed");

    assert_eq!(dao.count(false, None, NO_OPTIONS).await.expect("Count failed"), 0);
}

#[tokio::test]
async fn test_transaction_commit_publishes_writes() {
    let db = TestDatabase::new().await;
    let dao = db.dao();
    seed(&dao, &[create_test_app("A", "admin")]).await;

    let mut tx = dao.begin_tx().await.expect("Failed to begin transaction");
    dao.insert(Some(&create_test_app("B", "admin")), Some(&mut tx))
        .await
        .expect("Insert failed");
    dao.delete(Some(&mut tx), [with_app_id("A")])
        .await
        .expect("Delete failed");
    tx.commit().await.expect("Commit failed");

    assert_eq!(dao.count(false, None, NO_OPTIONS).await.expect("Count failed"), 2);
    assert_eq!(
        dao.count(false, None, [with_is_delete(true)]).await.expect("Count failed"),
        1
    );
}

#[tokio::test]
async fn test_health_check_and_close() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    pool.health_check().await.expect("Health check failed");
    pool.close().await;
    assert!(pool.health_check().await.is_err());
}
