/// Notification domain types
use serde::{Deserialize, Serialize};

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Someone liked a post
    Like,
    /// Someone commented on a post
    Comment,
    /// Someone followed the user
    Follow,
    /// Unrecognized category from a newer backend
    #[serde(other)]
    Other,
}

/// Minimal profile of the user who triggered a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationActor {
    /// Actor user ID
    pub id: String,

    /// Actor handle
    pub username: String,

    /// Actor display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Actor avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// Structured payload attached to a notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Follower involved, for follow notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_id: Option<String>,

    /// Post involved, for like/comment notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// A notification delivered to the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier
    pub id: String,

    /// Recipient user ID
    pub user_id: String,

    /// Notification category
    #[serde(rename = "type")]
    pub kind: NotificationKind,

    /// Short headline
    pub title: String,

    /// Longer body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Structured payload for navigation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,

    /// Whether the user has seen this notification
    pub is_read: bool,

    /// Creation timestamp (ISO string)
    pub created_at: String,

    /// Profile of the user who triggered the notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<NotificationActor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_falls_back_to_other() {
        let json = serde_json::json!({
            "id": "n1",
            "user_id": "u1",
            "type": "mention",
            "title": "You were mentioned",
            "is_read": false,
            "created_at": "2024-01-01T00:00:00Z"
        });

        let notification: Notification = serde_json::from_value(json).unwrap();
        assert_eq!(notification.kind, NotificationKind::Other);
    }

    #[test]
    fn test_known_kind_round_trips() {
        let json = serde_json::json!({
            "id": "n2",
            "user_id": "u1",
            "type": "like",
            "title": "alice liked your post",
            "data": { "post_id": "p9" },
            "is_read": true,
            "created_at": "2024-01-01T00:00:00Z"
        });

        let notification: Notification = serde_json::from_value(json).unwrap();
        assert_eq!(notification.kind, NotificationKind::Like);
        assert_eq!(notification.data.unwrap().post_id.as_deref(), Some("p9"));
    }
}
