//! Helix response shapes, kept separate from the normalized records so the
//! upstream JSON layout never leaks past this crate.

use serde::Deserialize;

/// Body returned by the `oauth2/token` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// The `{ "data": [...], "pagination": { "cursor": ... } }` envelope every
/// Helix collection endpoint uses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    pub(crate) fn cursor(&self) -> Option<String> {
        self.pagination
            .as_ref()
            .and_then(|p| p.cursor.as_ref())
            .filter(|c| !c.is_empty())
            .cloned()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// One entry from `helix/games` or `helix/games/top`.
#[derive(Debug, Deserialize)]
pub(crate) struct GameWire {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub box_art_url: String,
}

/// One entry from `helix/users`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserWire {
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub created_at: String,
}

/// One entry from `helix/streams`.
#[derive(Debug, Deserialize)]
pub(crate) struct StreamWire {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: u64,
    #[serde(default)]
    pub started_at: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub is_mature: bool,
}
