/// User domain types
use serde::{Deserialize, Serialize};

/// User account as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,

    /// Account email address
    pub email: String,

    /// Unique handle
    pub username: String,

    /// Display name shown in feeds and profiles
    pub display_name: String,

    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    /// Profile bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Whether the account has a Spotify connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_connected: Option<bool>,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}

impl User {
    /// Create a user with the required fields; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            display_name: display_name.into(),
            profile_image_url: None,
            bio: None,
            spotify_connected: None,
            created_at: String::new(),
        }
    }
}

/// User profile with follower/post counts, as returned by profile endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithStats {
    /// The underlying user account
    #[serde(flatten)]
    pub user: User,

    /// Number of followers
    pub followers_count: u64,

    /// Number of accounts this user follows
    pub following_count: u64,

    /// Number of posts
    pub posts_count: u64,

    /// Whether the authenticated user follows this profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_stats_flattens() {
        let json = serde_json::json!({
            "id": "u1",
            "email": "a@example.com",
            "username": "alice",
            "display_name": "Alice",
            "created_at": "2024-01-01T00:00:00Z",
            "followers_count": 3,
            "following_count": 1,
            "posts_count": 7,
            "is_following": true
        });

        let profile: UserWithStats = serde_json::from_value(json).unwrap();
        assert_eq!(profile.user.username, "alice");
        assert_eq!(profile.followers_count, 3);
        assert_eq!(profile.is_following, Some(true));
    }
}
