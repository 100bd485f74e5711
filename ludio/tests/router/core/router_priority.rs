use std::sync::Arc;

use ludio::{Ludio, LudioConnector, LudioError};

use crate::helpers::mock_connector::{MockConnector, hit};

fn searcher(name: &'static str, game_id: &'static str) -> MockConnector {
    MockConnector {
        name,
        search_fn: Some(Arc::new(move |q| Ok(vec![hit(game_id, q)]))),
        ..Default::default()
    }
}

#[tokio::test]
async fn prefer_reorders_providers() {
    let a: Arc<dyn LudioConnector> = Arc::new(searcher("a", "from_a"));
    let b: Arc<dyn LudioConnector> = Arc::new(searcher("b", "from_b"));

    let ludio = Ludio::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer(&[b, a])
        .build()
        .unwrap();

    let res = ludio.search_games(&["dota 2"]).await.unwrap();
    let hits = res[0].outcome.hit().unwrap();
    assert_eq!(hits[0].id, "from_b");
}

#[tokio::test]
async fn registration_order_is_the_default() {
    let a: Arc<dyn LudioConnector> = Arc::new(searcher("a", "from_a"));
    let b: Arc<dyn LudioConnector> = Arc::new(searcher("b", "from_b"));

    let ludio = Ludio::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let res = ludio.search_games(&["dota 2"]).await.unwrap();
    assert_eq!(res[0].outcome.hit().unwrap()[0].id, "from_a");
}

#[tokio::test]
async fn falls_back_to_next_provider_on_failure() {
    let broken = MockConnector {
        name: "broken",
        search_fn: Some(Arc::new(|_| Err(LudioError::upstream("broken", "503")))),
        ..Default::default()
    };
    let healthy = searcher("healthy", "from_healthy");

    let ludio = Ludio::builder()
        .with_connector(Arc::new(broken))
        .with_connector(Arc::new(healthy))
        .build()
        .unwrap();

    let res = ludio.search_games(&["dota 2"]).await.unwrap();
    assert_eq!(res[0].outcome.hit().unwrap()[0].id, "from_healthy");
}

#[tokio::test]
async fn build_rejects_empty_registration() {
    let err = Ludio::builder().build().unwrap_err();
    assert!(matches!(err, LudioError::InvalidInput(_)));
}

#[tokio::test]
async fn unknown_priority_keys_are_dropped() {
    let a: Arc<dyn LudioConnector> = Arc::new(searcher("a", "from_a"));
    let stranger: Arc<dyn LudioConnector> = Arc::new(searcher("stranger", "x"));

    // "stranger" is named in the priority but never registered.
    let ludio = Ludio::builder()
        .with_connector(a)
        .prefer(&[stranger])
        .build()
        .unwrap();

    let res = ludio.search_games(&["dota 2"]).await.unwrap();
    assert_eq!(res[0].outcome.hit().unwrap()[0].id, "from_a");
}
