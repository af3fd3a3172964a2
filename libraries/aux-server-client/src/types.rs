//! Types for Aux backend API requests and responses.

use aux_core::types::User;
use serde::{Deserialize, Serialize};

/// Default backend base URL, overridable via `AUX_API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://aux-app-backend.onrender.com/api/v1";

/// Configuration for connecting to the Aux backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://api.aux.example.com/api/v1")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a config from `AUX_API_BASE_URL`, falling back to the
    /// production backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("AUX_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the Google sign-in exchange.
#[derive(Debug, Serialize)]
pub struct GoogleSignInRequest {
    pub id_token: String,
}

/// Response from a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Usually "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// Request body for token refresh.
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Response from token refresh.
///
/// The backend may rotate the refresh token; when it does not, the old
/// one stays valid.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// =============================================================================
// User Types
// =============================================================================

/// Fields that can be changed on the authenticated user's profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// =============================================================================
// Post Types
// =============================================================================

/// Request body for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub spotify_track_id: String,
    pub track_name: String,
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_art_url: Option<String>,
}

/// Fields that can be changed on an existing post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Request body for creating a comment.
#[derive(Debug, Serialize)]
pub(crate) struct CreateCommentRequest {
    pub content: String,
}

// =============================================================================
// Spotify Types
// =============================================================================

/// Authorization URL for connecting a Spotify account.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAuthUrl {
    pub url: String,
}

/// Request body for completing the Spotify OAuth callback.
#[derive(Debug, Serialize)]
pub(crate) struct SpotifyCallbackRequest {
    pub code: String,
}

// =============================================================================
// Notification Types
// =============================================================================

/// Unread notification counter.
#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

// =============================================================================
// Storage Types
// =============================================================================

/// Response from a successful image upload.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUploadResponse {
    /// Public URL of the uploaded image
    pub url: String,
    /// Object path inside the bucket
    #[serde(default)]
    pub path: Option<String>,
    /// Bucket the object landed in
    #[serde(default)]
    pub bucket: Option<String>,
}

/// Request body for deleting an uploaded file.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteFileRequest {
    pub path: String,
    pub bucket: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body shape the backend uses for every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
