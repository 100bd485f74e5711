use std::sync::Arc;
use std::sync::atomic::Ordering;

use ludio::{Ludio, LudioError};

use crate::helpers::mock_connector::{MockConnector, hit};

#[tokio::test]
async fn dead_credential_aborts_before_any_item_fetch() {
    let connector = MockConnector {
        name: "revoked",
        ensure_ready_error: Some(LudioError::auth("revoked", "invalid client secret")),
        search_fn: Some(Arc::new(|name| Ok(vec![hit("1", name)]))),
        ..Default::default()
    };
    let calls = connector.calls.clone();

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let err = ludio.search_games(&["a", "b", "c"]).await.unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no item should have been fetched");
}

#[tokio::test]
async fn auth_error_mid_batch_aborts_the_batch() {
    let connector = MockConnector {
        name: "flaky_auth",
        search_fn: Some(Arc::new(|name| {
            if name == "second" {
                Err(LudioError::auth("flaky_auth", "token revoked mid-flight"))
            } else {
                Ok(vec![hit("1", name)])
            }
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let err = ludio.search_games(&["first", "second", "third"]).await.unwrap_err();
    assert!(matches!(err, LudioError::Auth { .. }));
}

#[tokio::test]
async fn nonfatal_ensure_ready_error_lets_the_batch_run() {
    let connector = MockConnector {
        name: "warmup_hiccup",
        ensure_ready_error: Some(LudioError::upstream("warmup_hiccup", "transient 503")),
        search_fn: Some(Arc::new(|name| Ok(vec![hit("1", name)]))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let res = ludio.search_games(&["a"]).await.unwrap();
    assert!(res[0].outcome.is_hit());
}
