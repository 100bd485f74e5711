use ludio_core::records::{GameHit, TopGame};

pub fn by_name(name: &str) -> Option<Vec<GameHit>> {
    match name {
        "Fortnite" => Some(vec![GameHit {
            id: "33214".into(),
            name: "Fortnite".into(),
            box_art_url: "https://mock.example/boxart/33214-300x400.jpg".into(),
        }]),
        "Dota 2" => Some(vec![GameHit {
            id: "29595".into(),
            name: "Dota 2".into(),
            box_art_url: "https://mock.example/boxart/29595-300x400.jpg".into(),
        }]),
        _ => None,
    }
}

pub fn top() -> Vec<TopGame> {
    vec![
        TopGame {
            id: "33214".into(),
            name: "Fortnite".into(),
            box_art_url: "https://mock.example/boxart/33214-300x400.jpg".into(),
            viewer_count: 250_000,
            stream_count: 1_200,
        },
        TopGame {
            id: "29595".into(),
            name: "Dota 2".into(),
            box_art_url: "https://mock.example/boxart/29595-300x400.jpg".into(),
            viewer_count: 180_000,
            stream_count: 900,
        },
        TopGame {
            id: "515025".into(),
            name: "Overwatch 2".into(),
            box_art_url: "https://mock.example/boxart/515025-300x400.jpg".into(),
            viewer_count: 60_000,
            stream_count: 400,
        },
    ]
}
