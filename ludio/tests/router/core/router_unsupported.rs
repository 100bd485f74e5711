use std::sync::Arc;

use ludio::{Ludio, LudioError};

use crate::helpers::mock_connector::MockConnector;

#[tokio::test]
async fn single_op_without_capable_provider_is_unsupported() {
    // Advertises search only; no snapshot capability anywhere.
    let searcher = MockConnector {
        name: "search_only",
        search_fn: Some(Arc::new(|_| Ok(vec![]))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(searcher))
        .build()
        .unwrap();

    let err = ludio.game_snapshot("dota 2").await.unwrap_err();
    assert!(matches!(err, LudioError::Unsupported { .. }));
}

#[tokio::test]
async fn batch_op_without_capable_provider_is_unsupported() {
    let searcher = MockConnector {
        name: "search_only",
        search_fn: Some(Arc::new(|_| Ok(vec![]))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(searcher))
        .build()
        .unwrap();

    let err = ludio
        .app_details(&["730"], &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LudioError::Unsupported { .. }));
}
