//! Tests for the SQLite credential store.

use aux_core::types::User;
use aux_core::CredentialStore;
use aux_storage::{create_pool, run_migrations, SqliteCredentialStore};

async fn setup_store() -> (tempfile::TempDir, SqliteCredentialStore) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("aux.db");
    let url = format!("sqlite://{}", db_path.display());

    let pool = create_pool(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();

    (dir, SqliteCredentialStore::new(pool))
}

// =============================================================================
// Token Round Trips
// =============================================================================

mod tokens {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_has_no_tokens() {
        let (_dir, store) = setup_store().await;

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(store.user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_access_token_round_trip() {
        let (_dir, store) = setup_store().await;

        store.set_access_token("access_1").await.unwrap();
        assert_eq!(
            store.access_token().await.unwrap().as_deref(),
            Some("access_1")
        );
    }

    #[tokio::test]
    async fn test_token_overwrite_last_writer_wins() {
        let (_dir, store) = setup_store().await;

        store.set_access_token("first").await.unwrap();
        store.set_access_token("second").await.unwrap();

        assert_eq!(
            store.access_token().await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_tokens_are_independent_keys() {
        let (_dir, store) = setup_store().await;

        store.set_access_token("access").await.unwrap();
        // Refresh token untouched
        assert!(store.refresh_token().await.unwrap().is_none());

        store.set_refresh_token("refresh").await.unwrap();
        assert_eq!(
            store.access_token().await.unwrap().as_deref(),
            Some("access")
        );
    }
}

// =============================================================================
// Cached User
// =============================================================================

mod user_profile {
    use super::*;

    #[tokio::test]
    async fn test_user_round_trip() {
        let (_dir, store) = setup_store().await;

        let mut user = User::new("u1", "alice@example.com", "alice", "Alice");
        user.bio = Some("music person".to_string());

        store.set_user(&user).await.unwrap();

        let loaded = store.user().await.unwrap().unwrap();
        assert_eq!(loaded, user);
    }

    #[tokio::test]
    async fn test_corrupt_user_json_is_an_error() {
        let (_dir, store) = setup_store().await;

        store.set_value("user", "not json").await.unwrap();

        assert!(store.user().await.is_err());
    }
}

// =============================================================================
// Clearing & Preferences
// =============================================================================

mod clearing {
    use super::*;

    #[tokio::test]
    async fn test_clear_removes_all_three_keys() {
        let (_dir, store) = setup_store().await;

        store.set_access_token("a").await.unwrap();
        store.set_refresh_token("r").await.unwrap();
        store
            .set_user(&User::new("u1", "a@example.com", "alice", "Alice"))
            .await
            .unwrap();

        store.clear_credentials().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(store.user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_on_empty_store_is_idempotent() {
        let (_dir, store) = setup_store().await;

        store.clear_credentials().await.unwrap();
        store.clear_credentials().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_preserves_biometric_preference() {
        let (_dir, store) = setup_store().await;

        store.set_biometric_enabled(true).await.unwrap();
        store.set_access_token("a").await.unwrap();

        store.clear_credentials().await.unwrap();

        assert!(store.biometric_enabled().await.unwrap());
    }

    #[tokio::test]
    async fn test_biometric_flag_defaults_to_false() {
        let (_dir, store) = setup_store().await;

        assert!(!store.biometric_enabled().await.unwrap());

        store.set_biometric_enabled(true).await.unwrap();
        assert!(store.biometric_enabled().await.unwrap());

        store.set_biometric_enabled(false).await.unwrap();
        assert!(!store.biometric_enabled().await.unwrap());
    }
}

// =============================================================================
// Credential Snapshot
// =============================================================================

mod snapshot {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_requires_both_tokens() {
        let (_dir, store) = setup_store().await;

        assert!(store.credentials().await.unwrap().is_none());

        store.set_access_token("a").await.unwrap();
        assert!(store.credentials().await.unwrap().is_none());

        store.set_refresh_token("r").await.unwrap();
        let creds = store.credentials().await.unwrap().unwrap();
        assert_eq!(creds.access_token, "a");
        assert_eq!(creds.refresh_token, "r");
        assert!(creds.user.is_none());
    }
}
