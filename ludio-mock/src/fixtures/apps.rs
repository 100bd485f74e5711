use ludio_core::records::{AppDetails, RecentGame, Review};

pub fn details(app_id: u32) -> Option<AppDetails> {
    let (name, genre) = match app_id {
        730 => ("Counter-Strike 2", "Action"),
        570 => ("Dota 2", "Strategy"),
        _ => return None,
    };
    Some(AppDetails {
        app_id,
        name: name.into(),
        description: format!("{name} mock description"),
        release_date: "21 Aug, 2012".into(),
        genres: vec![genre.into()],
        categories: vec!["Multi-player".into()],
        price: "R$ 0,00".into(),
        current_players: players(app_id).unwrap_or(0),
        total_reviews: 2,
        review_score: "Very Positive".into(),
        reviews: vec!["muito bom".into(), "excelente".into()],
        pc_requirements_minimum: "8 GB RAM".into(),
        pc_requirements_recommended: "16 GB RAM".into(),
    })
}

pub fn players(app_id: u32) -> Option<u64> {
    match app_id {
        730 => Some(1_100_000),
        570 => Some(450_000),
        _ => None,
    }
}

pub fn reviews(app_id: u32) -> Vec<Review> {
    match app_id {
        730 | 570 => vec![
            Review {
                app_id,
                review: "muito bom".into(),
                user_id: "7656001".into(),
                hours_played: 120.5,
                recommended: true,
            },
            Review {
                app_id,
                review: "cansei".into(),
                user_id: "7656002".into(),
                hours_played: 3.0,
                recommended: false,
            },
        ],
        _ => Vec::new(),
    }
}

pub fn recent(app_id: u32) -> Vec<RecentGame> {
    match app_id {
        730 => vec![
            RecentGame {
                name: "Counter-Strike 2".into(),
                app_id: 730,
                player_count: 5,
            },
            RecentGame {
                name: "Dota 2".into(),
                app_id: 570,
                player_count: 2,
            },
        ],
        _ => Vec::new(),
    }
}
