//! Credential storage trait

use crate::error::Result;
use crate::types::{Credentials, User};
use async_trait::async_trait;

/// Device-local persistence for the credential slot.
///
/// This trait abstracts the key-value store holding the signed-in user's
/// tokens so the HTTP client can run against SQLite on device and an
/// in-memory store in tests. Each key is written independently; callers
/// must not assume the access token, refresh token, and cached user are
/// updated atomically as a group.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get the persisted access token, if any.
    async fn access_token(&self) -> Result<Option<String>>;

    /// Persist a new access token.
    async fn set_access_token(&self, token: &str) -> Result<()>;

    /// Get the persisted refresh token, if any.
    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Persist a new refresh token.
    async fn set_refresh_token(&self, token: &str) -> Result<()>;

    /// Get the cached profile of the signed-in user, if any.
    async fn user(&self) -> Result<Option<User>>;

    /// Cache the signed-in user's profile.
    async fn set_user(&self, user: &User) -> Result<()>;

    /// Erase the access token, refresh token, and cached user.
    ///
    /// Idempotent: clearing an empty store succeeds. The biometric
    /// preference flag is a device setting and survives this call.
    async fn clear_credentials(&self) -> Result<()>;

    /// Whether the user opted into biometric unlock.
    async fn biometric_enabled(&self) -> Result<bool>;

    /// Record the biometric unlock preference.
    async fn set_biometric_enabled(&self, enabled: bool) -> Result<()>;

    /// Convenience snapshot of the whole credential slot.
    ///
    /// Returns `None` unless both tokens are present.
    async fn credentials(&self) -> Result<Option<Credentials>> {
        let access_token = match self.access_token().await? {
            Some(token) => token,
            None => return Ok(None),
        };
        let refresh_token = match self.refresh_token().await? {
            Some(token) => token,
            None => return Ok(None),
        };
        Ok(Some(Credentials {
            access_token,
            refresh_token,
            user: self.user().await?,
        }))
    }
}
