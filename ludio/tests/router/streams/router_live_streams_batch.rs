use std::sync::Arc;

use ludio::{LiveStream, Ludio, LudioError, Outcome, StreamOptions};

use crate::helpers::mock_connector::MockConnector;

fn stream(user: &str, language: &str, viewers: u64) -> LiveStream {
    LiveStream {
        user_name: user.to_owned(),
        language: language.to_owned(),
        viewer_count: viewers,
        ..Default::default()
    }
}

#[tokio::test]
async fn quiet_game_is_a_hit_with_an_empty_list() {
    let connector = MockConnector {
        name: "streams",
        live_streams_fn: Some(Arc::new(|game_id, _| match game_id {
            "busy" => Ok(vec![stream("ana", "pt", 100), stream("bob", "pt", 50)]),
            "quiet" => Ok(vec![]),
            _ => Err(LudioError::not_found(format!("game '{game_id}'"))),
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let res = ludio
        .live_streams(&["busy", "quiet", "unknown"], &StreamOptions::default())
        .await
        .unwrap();

    assert_eq!(res[0].outcome.hit().unwrap().len(), 2);
    assert_eq!(res[1].outcome.hit().unwrap().len(), 0);
    assert!(matches!(res[2].outcome, Outcome::Missing));
}

#[tokio::test]
async fn options_are_passed_through_to_the_provider() {
    let connector = MockConnector {
        name: "streams",
        live_streams_fn: Some(Arc::new(|_, opts| {
            assert_eq!(opts.language, "en");
            assert_eq!(opts.limit, 5);
            Ok(vec![])
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let opts = StreamOptions {
        language: "en".to_owned(),
        limit: 5,
    };
    let res = ludio.live_streams(&["123"], &opts).await.unwrap();
    assert!(res[0].outcome.is_hit());
}

#[tokio::test]
async fn summary_routes_to_the_capable_provider() {
    let connector = MockConnector {
        name: "streams",
        summary_fn: Some(Arc::new(|game_id| {
            Ok(ludio::StreamSummary {
                game_id: game_id.to_owned(),
                total_streams: 3,
                total_viewers: 300,
                average_viewers: 100.0,
                ..Default::default()
            })
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let summary = ludio.stream_summary("29595").await.unwrap();
    assert_eq!(summary.game_id, "29595");
    assert_eq!(summary.total_viewers, 300);
}
