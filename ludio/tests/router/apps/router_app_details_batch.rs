use std::sync::Arc;

use ludio::{AppDetails, ErrorKind, Ludio, LudioError, Outcome, ReviewOptions};

use crate::helpers::mock_connector::MockConnector;

fn details(app_id: u32) -> AppDetails {
    AppDetails {
        app_id,
        name: format!("app {app_id}"),
        ..Default::default()
    }
}

fn storefront() -> MockConnector {
    MockConnector {
        name: "storefront",
        app_details_fn: Some(Arc::new(|app_id, _| match app_id {
            404 => Err(LudioError::not_found(format!("app {app_id}"))),
            500 => Err(LudioError::upstream("storefront", "store 500")),
            other => Ok(details(other)),
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn non_numeric_id_fails_the_item_not_the_batch() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(storefront()))
        .build()
        .unwrap();

    let res = ludio
        .app_details(&["730", "not-a-number", "404"], &ReviewOptions::default())
        .await
        .unwrap();

    assert_eq!(res[0].outcome.hit().unwrap().app_id, 730);
    match &res[1].outcome {
        Outcome::Failed(marker) => assert_eq!(marker.kind, ErrorKind::InvalidInput),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(matches!(res[2].outcome, Outcome::Missing));
}

#[tokio::test]
async fn upstream_failure_is_marked_and_the_batch_continues() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(storefront()))
        .build()
        .unwrap();

    let res = ludio
        .app_details(&["500", "730"], &ReviewOptions::default())
        .await
        .unwrap();

    assert!(matches!(res[0].outcome, Outcome::Failed(_)));
    assert!(res[1].outcome.is_hit());
}

#[tokio::test]
async fn reviews_honor_option_passthrough() {
    let connector = MockConnector {
        name: "storefront",
        reviews_fn: Some(Arc::new(|app_id, opts| {
            assert_eq!(opts.language, "english");
            assert_eq!(opts.max_reviews, 3);
            Ok(vec![ludio::Review {
                app_id,
                review: "great".to_owned(),
                ..Default::default()
            }])
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let opts = ReviewOptions {
        language: "english".to_owned(),
        max_reviews: 3,
    };
    let res = ludio.app_reviews(&["730"], &opts).await.unwrap();
    assert_eq!(res[0].outcome.hit().unwrap()[0].app_id, 730);
}

#[tokio::test]
async fn recent_games_missing_key_is_fatal_for_the_batch() {
    let connector = MockConnector {
        name: "storefront",
        recent_fn: Some(Arc::new(|_, _| {
            Err(LudioError::config("api key required for recently-played"))
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let err = ludio
        .recent_games(&["730", "570"], &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LudioError::Config(_)));
}
