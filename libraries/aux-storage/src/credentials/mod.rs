//! Credential slot persistence
//!
//! The credential slot is a handful of fixed keys in a key-value table.
//! Each key is upserted independently: last writer wins per key, and no
//! transactional guarantee covers the slot as a whole.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use aux_core::types::User;
use aux_core::{AuxError, CredentialStore};

use crate::error::{Result, StorageError};

// Credential slot keys
/// Short-lived bearer token for API calls
pub const KEY_ACCESS_TOKEN: &str = "access_token";

/// Longer-lived token exchanged for new access tokens
pub const KEY_REFRESH_TOKEN: &str = "refresh_token";

/// Serialized profile of the signed-in user (JSON)
pub const KEY_USER: &str = "user";

/// Biometric unlock preference ("true"/"false")
pub const KEY_BIOMETRIC_ENABLED: &str = "biometric_enabled";

/// `SQLite`-backed credential store.
///
/// One row per key in the `credentials` table; see the crate migrations
/// for the schema.
#[derive(Debug, Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    /// Create a store over an already-migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a raw value by key.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM credentials WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Upsert a raw value by key.
    pub async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO credentials (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a value by key.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the key was
    /// already absent.
    pub async fn delete_value(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM credentials WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn access_token(&self) -> aux_core::Result<Option<String>> {
        Ok(self.get_value(KEY_ACCESS_TOKEN).await?)
    }

    async fn set_access_token(&self, token: &str) -> aux_core::Result<()> {
        Ok(self.set_value(KEY_ACCESS_TOKEN, token).await?)
    }

    async fn refresh_token(&self) -> aux_core::Result<Option<String>> {
        Ok(self.get_value(KEY_REFRESH_TOKEN).await?)
    }

    async fn set_refresh_token(&self, token: &str) -> aux_core::Result<()> {
        Ok(self.set_value(KEY_REFRESH_TOKEN, token).await?)
    }

    async fn user(&self) -> aux_core::Result<Option<User>> {
        match self.get_value(KEY_USER).await? {
            Some(json) => {
                let user = serde_json::from_str(&json)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn set_user(&self, user: &User) -> aux_core::Result<()> {
        let json = serde_json::to_string(user)
            .map_err(|e| AuxError::serialization(e.to_string()))?;
        Ok(self.set_value(KEY_USER, &json).await?)
    }

    async fn clear_credentials(&self) -> aux_core::Result<()> {
        // Three independent deletes; the biometric flag is left alone.
        self.delete_value(KEY_ACCESS_TOKEN).await?;
        self.delete_value(KEY_REFRESH_TOKEN).await?;
        self.delete_value(KEY_USER).await?;
        debug!("Credential slot cleared");
        Ok(())
    }

    async fn biometric_enabled(&self) -> aux_core::Result<bool> {
        let value = self.get_value(KEY_BIOMETRIC_ENABLED).await?;
        Ok(value.as_deref() == Some("true"))
    }

    async fn set_biometric_enabled(&self, enabled: bool) -> aux_core::Result<()> {
        let value = if enabled { "true" } else { "false" };
        Ok(self.set_value(KEY_BIOMETRIC_ENABLED, value).await?)
    }
}
