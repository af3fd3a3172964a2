/// Post and comment domain types
use serde::{Deserialize, Serialize};

use super::user::User;

/// A shared track post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: String,

    /// Author user ID
    pub user_id: String,

    /// Spotify track ID the post is about
    pub spotify_track_id: String,

    /// Track title snapshot
    pub track_name: String,

    /// Artist name snapshot
    pub artist_name: String,

    /// Album art URL snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_art_url: Option<String>,

    /// Optional caption written by the author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Spotify URI for deep linking (e.g. `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_uri: Option<String>,

    /// Creation timestamp (ISO string)
    pub created_at: String,

    /// Last update timestamp (ISO string)
    pub updated_at: String,

    /// Author profile embedded by the backend
    pub user: User,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: String,

    /// Post the comment belongs to
    pub post_id: String,

    /// Author user ID
    pub user_id: String,

    /// Comment body
    pub content: String,

    /// Creation timestamp (ISO string)
    pub created_at: String,

    /// Author profile embedded by the backend
    pub user: User,
}
