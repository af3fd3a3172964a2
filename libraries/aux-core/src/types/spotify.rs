/// Spotify catalog types surfaced through the backend
use serde::{Deserialize, Serialize};

/// A Spotify track as returned by search, top-tracks, and now-playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyTrack {
    /// Spotify track ID
    pub id: String,

    /// Track title
    pub name: String,

    /// Primary artist name
    pub artist: String,

    /// Album title
    pub album: String,

    /// Album art URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_art_url: Option<String>,

    /// 30-second preview URL, when Spotify provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    /// Track length in milliseconds
    pub duration_ms: u64,

    /// Spotify URI for deep linking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Whether the authenticated user has a Spotify connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyStatus {
    /// True when the backend holds valid Spotify credentials for the user
    pub connected: bool,

    /// Spotify user ID, when connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
