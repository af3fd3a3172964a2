/// Persisted credential slot
use serde::{Deserialize, Serialize};

use super::user::User;

/// Snapshot of the persisted credential slot.
///
/// Written on sign-in and token refresh, erased on sign-out or when a
/// refresh irrecoverably fails. The three parts are stored under separate
/// keys and are NOT updated atomically as a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Short-lived bearer token attached to API calls
    pub access_token: String,

    /// Longer-lived token exchanged for new access tokens
    pub refresh_token: String,

    /// Cached profile of the signed-in user
    pub user: Option<User>,
}
