use std::sync::Arc;

use ludio::{ErrorKind, Ludio, LudioError, Outcome};

use crate::helpers::mock_connector::{MockConnector, hit};

fn scripted() -> MockConnector {
    MockConnector {
        name: "scripted",
        search_fn: Some(Arc::new(|name| match name {
            "boom" => Err(LudioError::upstream("scripted", "500")),
            "ghost" => Ok(vec![]),
            other => Ok(vec![hit("1", other)]),
        })),
        ..Default::default()
    }
}

#[tokio::test]
async fn one_entry_per_input_in_input_order() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(scripted()))
        .build()
        .unwrap();

    let inputs = ["dota 2", "boom", "ghost", "elden ring"];
    let res = ludio.search_games(&inputs).await.unwrap();

    assert_eq!(res.len(), inputs.len());
    let order: Vec<&str> = res.iter().map(|i| i.input.as_str()).collect();
    assert_eq!(order, inputs);

    assert!(res[0].outcome.is_hit());
    match &res[1].outcome {
        Outcome::Failed(marker) => assert_eq!(marker.kind, ErrorKind::Upstream),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(matches!(res[2].outcome, Outcome::Missing));
    assert!(res[3].outcome.is_hit());
}

#[tokio::test]
async fn empty_upstream_match_is_missing_not_empty_hit() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(scripted()))
        .build()
        .unwrap();

    let res = ludio.search_games(&["ghost"]).await.unwrap();
    assert!(matches!(res[0].outcome, Outcome::Missing));
}

#[tokio::test]
async fn empty_input_short_circuits() {
    let connector = scripted();
    let calls = connector.calls.clone();
    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let res = ludio.search_games(&[]).await.unwrap();
    assert!(res.is_empty());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrency_preserves_input_order() {
    let connector = MockConnector {
        name: "slowish",
        delay_ms: 15,
        search_fn: Some(Arc::new(|name| Ok(vec![hit("1", name)]))),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .batch_concurrency(4)
        .build()
        .unwrap();

    let inputs = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let res = ludio.search_games(&inputs).await.unwrap();
    let order: Vec<&str> = res.iter().map(|i| i.input.as_str()).collect();
    assert_eq!(order, inputs);
    assert!(res.iter().all(|i| i.outcome.is_hit()));
}
