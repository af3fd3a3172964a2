//! In-memory credential store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use aux_core::types::User;
use aux_core::{AuxError, CredentialStore};

use crate::credentials::{
    KEY_ACCESS_TOKEN, KEY_BIOMETRIC_ENABLED, KEY_REFRESH_TOKEN, KEY_USER,
};

/// Credential store backed by a process-local map.
///
/// Same key layout as [`crate::SqliteCredentialStore`], nothing persisted.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn access_token(&self) -> aux_core::Result<Option<String>> {
        Ok(self.get(KEY_ACCESS_TOKEN))
    }

    async fn set_access_token(&self, token: &str) -> aux_core::Result<()> {
        self.set(KEY_ACCESS_TOKEN, token.to_string());
        Ok(())
    }

    async fn refresh_token(&self) -> aux_core::Result<Option<String>> {
        Ok(self.get(KEY_REFRESH_TOKEN))
    }

    async fn set_refresh_token(&self, token: &str) -> aux_core::Result<()> {
        self.set(KEY_REFRESH_TOKEN, token.to_string());
        Ok(())
    }

    async fn user(&self) -> aux_core::Result<Option<User>> {
        match self.get(KEY_USER) {
            Some(json) => Ok(Some(serde_json::from_str(&json).map_err(|e| {
                AuxError::serialization(e.to_string())
            })?)),
            None => Ok(None),
        }
    }

    async fn set_user(&self, user: &User) -> aux_core::Result<()> {
        let json =
            serde_json::to_string(user).map_err(|e| AuxError::serialization(e.to_string()))?;
        self.set(KEY_USER, json);
        Ok(())
    }

    async fn clear_credentials(&self) -> aux_core::Result<()> {
        self.remove(KEY_ACCESS_TOKEN);
        self.remove(KEY_REFRESH_TOKEN);
        self.remove(KEY_USER);
        Ok(())
    }

    async fn biometric_enabled(&self) -> aux_core::Result<bool> {
        Ok(self.get(KEY_BIOMETRIC_ENABLED).as_deref() == Some("true"))
    }

    async fn set_biometric_enabled(&self, enabled: bool) -> aux_core::Result<()> {
        self.set(
            KEY_BIOMETRIC_ENABLED,
            if enabled { "true" } else { "false" }.to_string(),
        );
        Ok(())
    }
}
