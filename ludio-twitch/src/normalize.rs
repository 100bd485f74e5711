//! Helix wire shapes to normalized records.

use std::collections::BTreeMap;

use ludio_core::records::{Channel, GameHit, LiveStream, StreamSummary, StreamerRank};
use ludio_core::resolve_dimensions;

use crate::wire::{GameWire, StreamWire, UserWire};

/// Concrete box art size requested from the `{width}x{height}` template.
pub(crate) const BOX_ART_WIDTH: u32 = 300;
pub(crate) const BOX_ART_HEIGHT: u32 = 400;

/// Concrete thumbnail size requested from the `{width}x{height}` template.
pub(crate) const THUMBNAIL_WIDTH: u32 = 640;
pub(crate) const THUMBNAIL_HEIGHT: u32 = 360;

/// Leaderboard depth in a stream summary.
const TOP_STREAMERS: usize = 10;

pub(crate) fn game_hit(w: GameWire) -> GameHit {
    GameHit {
        id: w.id,
        name: w.name,
        box_art_url: resolve_dimensions(&w.box_art_url, BOX_ART_WIDTH, BOX_ART_HEIGHT),
    }
}

pub(crate) fn channel(w: UserWire) -> Channel {
    Channel {
        id: w.id,
        login: w.login,
        display_name: w.display_name,
        kind: w.kind,
        broadcaster_type: w.broadcaster_type,
        description: w.description,
        profile_image_url: w.profile_image_url,
        offline_image_url: w.offline_image_url,
        view_count: w.view_count,
        created_at: w.created_at,
    }
}

pub(crate) fn live_stream(w: StreamWire) -> LiveStream {
    LiveStream {
        id: w.id,
        user_id: w.user_id,
        user_login: w.user_login,
        user_name: w.user_name,
        game_id: w.game_id,
        game_name: w.game_name,
        kind: w.kind,
        title: w.title,
        viewer_count: w.viewer_count,
        started_at: w.started_at,
        language: w.language,
        thumbnail_url: resolve_dimensions(&w.thumbnail_url, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT),
        is_mature: w.is_mature,
    }
}

/// Collapse every live broadcast of one game into a summary: viewer and
/// stream totals, a per-language histogram, and the ten largest streams.
///
/// An empty input yields zeroed totals and an average of `0.0`.
pub(crate) fn summarize(game_id: &str, streams: &[LiveStream]) -> StreamSummary {
    let total_streams = streams.len();
    let total_viewers: u64 = streams.iter().map(|s| s.viewer_count).sum();
    let average_viewers = if streams.is_empty() {
        0.0
    } else {
        total_viewers as f64 / total_streams as f64
    };

    let mut languages = BTreeMap::new();
    for s in streams {
        let lang = if s.language.is_empty() {
            "unknown"
        } else {
            s.language.as_str()
        };
        *languages.entry(lang.to_string()).or_insert(0u64) += 1;
    }

    let mut ranks: Vec<StreamerRank> = streams
        .iter()
        .map(|s| StreamerRank {
            user_name: s.user_name.clone(),
            viewer_count: s.viewer_count,
        })
        .collect();
    // Stable sort keeps upstream order among equal viewer counts.
    ranks.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
    ranks.truncate(TOP_STREAMERS);

    StreamSummary {
        game_id: game_id.to_string(),
        total_streams,
        total_viewers,
        average_viewers,
        languages,
        top_streamers: ranks,
    }
}
