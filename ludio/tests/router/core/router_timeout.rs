use std::sync::Arc;
use std::time::Duration;

use ludio::{Ludio, LudioError};

use crate::helpers::mock_connector::MockConnector;

#[tokio::test]
async fn slow_provider_surfaces_as_upstream_timeout() {
    let slow = MockConnector {
        name: "slow",
        delay_ms: 200,
        current_players_fn: Some(Arc::new(|_| Ok(42))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(slow))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = ludio.current_players(730).await.unwrap_err();
    match err {
        LudioError::Upstream { provider, msg } => {
            assert_eq!(provider, "slow");
            assert!(msg.contains("timed out"), "unexpected message: {msg}");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_triggers_fallback_to_faster_provider() {
    let slow = MockConnector {
        name: "slow",
        delay_ms: 200,
        current_players_fn: Some(Arc::new(|_| Ok(1))),
        ..Default::default()
    };
    let fast = MockConnector {
        name: "fast",
        current_players_fn: Some(Arc::new(|_| Ok(2))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(slow))
        .with_connector(Arc::new(fast))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    assert_eq!(ludio.current_players(730).await.unwrap(), 2);
}
