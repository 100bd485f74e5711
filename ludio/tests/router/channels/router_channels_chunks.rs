use std::sync::Arc;
use std::sync::atomic::Ordering;

use ludio::{Channel, ErrorKind, Ludio, LudioError};

use crate::helpers::mock_connector::MockConnector;

fn channel(login: &str) -> Channel {
    Channel {
        id: format!("id_{login}"),
        login: login.to_owned(),
        ..Default::default()
    }
}

#[tokio::test]
async fn logins_are_chunked_to_the_provider_cap() {
    let connector = MockConnector {
        name: "bulk",
        max_batch: 2,
        channels_fn: Some(Arc::new(|logins| {
            assert!(logins.len() <= 2);
            Ok(logins.iter().map(|l| channel(l)).collect())
        })),
        ..Default::default()
    };
    let calls = connector.calls.clone();

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let (profiles, failures) = ludio
        .channels(&["a", "b", "c", "d", "e"])
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3, "5 logins at cap 2 is 3 requests");
    assert_eq!(profiles.len(), 5);
    assert!(failures.is_empty());
    let order: Vec<&str> = profiles.iter().map(|c| c.login.as_str()).collect();
    assert_eq!(order, ["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn failed_chunk_marks_each_login_and_continues() {
    let connector = MockConnector {
        name: "bulk",
        max_batch: 2,
        channels_fn: Some(Arc::new(|logins| {
            if logins.iter().any(|l| l == "bad") {
                Err(LudioError::upstream("bulk", "chunk exploded"))
            } else {
                Ok(logins.iter().map(|l| channel(l)).collect())
            }
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    // Chunks: [a, b], [bad, c], [d]. The middle chunk fails.
    let (profiles, failures) = ludio
        .channels(&["a", "b", "bad", "c", "d"])
        .await
        .unwrap();

    assert_eq!(profiles.len(), 3);
    assert_eq!(failures.len(), 2, "one marker per login in the failed chunk");
    assert!(failures.iter().all(|m| m.kind == ErrorKind::Upstream));
}

#[tokio::test]
async fn unknown_logins_are_absent_without_markers() {
    let connector = MockConnector {
        name: "bulk",
        max_batch: 100,
        channels_fn: Some(Arc::new(|logins| {
            Ok(logins
                .iter()
                .filter(|l| l.as_str() != "nobody")
                .map(|l| channel(l))
                .collect())
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let (profiles, failures) = ludio.channels(&["someone", "nobody"]).await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert!(failures.is_empty());
}

#[tokio::test]
async fn empty_input_short_circuits() {
    let connector = MockConnector {
        name: "bulk",
        channels_fn: Some(Arc::new(|_| Ok(vec![]))),
        ..Default::default()
    };
    let calls = connector.calls.clone();

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let (profiles, failures) = ludio.channels(&[]).await.unwrap();
    assert!(profiles.is_empty() && failures.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
