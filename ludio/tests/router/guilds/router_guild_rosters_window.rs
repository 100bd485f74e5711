use std::sync::Arc;

use ludio::{Ludio, LudioError, RosterOptions};

use crate::helpers::mock_connector::{MockConnector, member, profile};

fn roster_connector() -> MockConnector {
    MockConnector {
        name: "mmo",
        guild_members_fn: Some(Arc::new(|guild| match guild {
            "Alpha" => Ok(vec![member("a1"), member("a2"), member("a3")]),
            "Beta" => Ok(vec![member("b1"), member("b2"), member("b3")]),
            "Broken" => Err(LudioError::upstream("mmo", "roster 500")),
            other => Err(LudioError::not_found(format!("guild '{other}'"))),
        })),
        member_profile_fn: Some(Arc::new(|name| match name {
            "b2" => Ok(None),
            "a3" => Err(LudioError::upstream("mmo", "profile 500")),
            other => Ok(Some(profile(other))),
        })),
        ..Default::default()
    }
}

fn opts(offset: usize, limit: usize) -> RosterOptions {
    RosterOptions {
        offset,
        limit,
        ..Default::default()
    }
}

#[tokio::test]
async fn window_spans_guild_boundaries_with_a_shared_counter() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(roster_connector()))
        .build()
        .unwrap();

    // Members in walk order: a1 a2 a3 | b1 b2 b3. Window [2, 5).
    let report = ludio
        .guild_rosters(&["Alpha", "Beta"], &opts(2, 3))
        .await
        .unwrap();

    assert_eq!(report.total, 6);
    assert_eq!((report.offset, report.limit), (2, 3));
    // a3 fails its profile fetch and b2 is gone upstream; both are skipped.
    let names: Vec<&str> = report.results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["b1"]);
}

#[tokio::test]
async fn failed_guild_is_skipped_and_the_rest_are_walked() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(roster_connector()))
        .build()
        .unwrap();

    let report = ludio
        .guild_rosters(&["Broken", "Beta"], &opts(0, 10))
        .await
        .unwrap();

    assert_eq!(report.total, 3, "only Beta's members are counted");
    let names: Vec<&str> = report.results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["b1", "b3"]);
}

#[tokio::test]
async fn offset_past_the_end_collects_nothing_but_reports_total() {
    let ludio = Ludio::builder()
        .with_connector(Arc::new(roster_connector()))
        .build()
        .unwrap();

    let report = ludio
        .guild_rosters(&["Alpha"], &opts(50, 10))
        .await
        .unwrap();

    assert_eq!(report.total, 3);
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn character_profile_not_found_is_typed() {
    let connector = MockConnector {
        name: "mmo",
        character_fn: Some(Arc::new(|_, name| {
            Err(LudioError::not_found(format!("character '{name}'")))
        })),
        ..Default::default()
    };

    let ludio = Ludio::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap();

    let err = ludio
        .character_profile("azralon", "Ghost", "us")
        .await
        .unwrap_err();
    assert!(matches!(err, LudioError::NotFound { .. }));
}
