//! Tests for the MySQL feedback store. They need a reachable database
//! configured through the usual `DB_*` variables and are ignored by
//! default:
//!
//! ```text
//! DB_HOST=127.0.0.1 DB_USER=root DB_PASSWORD=secret DB_NAME=musicdb \
//!     cargo test --test mysql_store -- --ignored
//! ```

#![allow(clippy::panic)]

use chrono::{Duration, Utc};

use musician_directory::config::AppConfig;
use musician_directory::domain::FeedbackSubmission;
use musician_directory::persistence::{FeedbackStore, MySqlFeedbackStore};

async fn store() -> MySqlFeedbackStore {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => panic!("database configuration required: {err}"),
    };
    let store = MySqlFeedbackStore::connect_lazy(&config.database);
    if let Err(err) = store.ensure_schema().await {
        panic!("schema bootstrap failed: {err}");
    }
    store
}

#[tokio::test]
#[ignore = "requires a MySQL database"]
async fn ensure_schema_is_idempotent() {
    let store = store().await;
    assert!(store.ensure_schema().await.is_ok());
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
#[ignore = "requires a MySQL database"]
async fn created_entry_is_listed_first() {
    let store = store().await;
    // TIMESTAMP has second precision.
    let before = Utc::now() - Duration::seconds(1);

    let Ok(feedback) = FeedbackSubmission::new("Ada", "ada@example.com", "Great!").validate()
    else {
        panic!("fixture should validate");
    };
    let Ok(id) = store.create(&feedback).await else {
        panic!("insert failed");
    };

    let Ok(list) = store.list_recent(50).await else {
        panic!("list failed");
    };
    let Some(first) = list.first() else {
        panic!("expected at least one entry");
    };
    assert_eq!(first.id, id);
    assert_eq!(first.name, "Ada");
    assert!(first.created_at.is_some_and(|ts| ts >= before));
}

#[tokio::test]
#[ignore = "requires a MySQL database"]
async fn listing_is_ordered_and_capped() {
    let store = store().await;
    for i in 0..3 {
        let Ok(feedback) =
            FeedbackSubmission::new(&format!("fan {i}"), "fan@example.com", "hi").validate()
        else {
            panic!("fixture should validate");
        };
        let _ = store.create(&feedback).await;
    }

    let Ok(list) = store.list_recent(2).await else {
        panic!("list failed");
    };
    assert!(list.len() <= 2);

    let Ok(list) = store.list_recent(50).await else {
        panic!("list failed");
    };
    assert!(list.len() <= 50);
    for pair in list.windows(2) {
        let [newer, older] = pair else {
            panic!("windows(2) yields pairs");
        };
        assert!(newer.created_at >= older.created_at);
        if newer.created_at == older.created_at {
            assert!(newer.id > older.id);
        }
    }
}
