use ludio_core::records::{Channel, LiveStream};

pub fn for_game(game_id: &str) -> Vec<LiveStream> {
    let rows: &[(&str, &str, u64, &str)] = match game_id {
        "33214" => &[
            ("101", "streamer_a", 12_000, "pt"),
            ("102", "streamer_b", 8_000, "en"),
            ("103", "streamer_c", 500, "pt"),
        ],
        "29595" => &[
            ("201", "streamer_d", 30_000, "en"),
            ("202", "streamer_e", 1_500, "pt"),
        ],
        _ => &[],
    };
    rows.iter()
        .map(|(id, user, viewers, lang)| LiveStream {
            id: (*id).into(),
            user_id: format!("u-{id}"),
            user_login: (*user).into(),
            user_name: (*user).into(),
            game_id: game_id.into(),
            game_name: String::new(),
            kind: "live".into(),
            title: format!("{user} playing"),
            viewer_count: *viewers,
            started_at: "2024-01-01T00:00:00Z".into(),
            language: (*lang).into(),
            thumbnail_url: format!("https://mock.example/thumb/{id}-640x360.jpg"),
            is_mature: false,
        })
        .collect()
}

pub fn channel(login: &str) -> Option<Channel> {
    if login.starts_with("ghost") {
        return None;
    }
    Some(Channel {
        id: format!("id-{login}"),
        login: login.into(),
        display_name: login.to_uppercase(),
        kind: String::new(),
        broadcaster_type: "partner".into(),
        description: format!("mock channel {login}"),
        profile_image_url: format!("https://mock.example/avatar/{login}.png"),
        offline_image_url: String::new(),
        view_count: 1_000,
        created_at: "2020-06-01T00:00:00Z".into(),
    })
}
