//! Tests for the Aux server client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real backend.

use std::sync::Arc;

use aux_core::CredentialStore;
use aux_server_client::{AuxClient, ClientConfig, ClientError};
use aux_storage::MemoryCredentialStore;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, AuxClient, Arc<MemoryCredentialStore>) {
    let mock_server = MockServer::start().await;
    let store = Arc::new(MemoryCredentialStore::new());
    let client =
        AuxClient::new(ClientConfig::new(mock_server.uri()), store.clone()).expect("valid url");
    (mock_server, client, store)
}

fn user_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "email": format!("{username}@example.com"),
        "username": username,
        "display_name": "Alice",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_urls() {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        assert!(AuxClient::new(ClientConfig::new("https://example.com"), store.clone()).is_ok());
        assert!(AuxClient::new(ClientConfig::new("http://localhost:8080"), store).is_ok());
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

        for bad in ["", "example.com", "ftp://example.com"] {
            let result = AuxClient::new(ClientConfig::new(bad), store.clone());
            match result {
                Err(ClientError::InvalidUrl(_)) => {}
                other => panic!("Expected InvalidUrl for {bad:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        let client =
            AuxClient::new(ClientConfig::new("https://example.com/api/v1///"), store).unwrap();
        assert!(!client.url().ends_with('/'));
    }
}

// =============================================================================
// Sign-In Tests
// =============================================================================

mod sign_in {
    use super::*;

    #[tokio::test]
    async fn test_successful_sign_in_persists_credentials() {
        let (mock_server, client, store) = setup().await;

        Mock::given(method("POST"))
            .and(path("/google"))
            .and(body_json(serde_json::json!({ "id_token": "google-id-token" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "access_1",
                "refresh_token": "refresh_1",
                "token_type": "bearer",
                "user": user_body("alice")
            })))
            .mount(&mock_server)
            .await;

        let auth = client.sign_in_with_google("google-id-token").await.unwrap();
        assert_eq!(auth.access_token, "access_1");
        assert_eq!(auth.user.username, "alice");

        // Credential slot was written
        assert_eq!(
            store.access_token().await.unwrap().as_deref(),
            Some("access_1")
        );
        assert_eq!(
            store.refresh_token().await.unwrap().as_deref(),
            Some("refresh_1")
        );
        assert_eq!(
            store.user().await.unwrap().unwrap().username,
            "alice"
        );
        assert!(client.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_in_rejected_surfaces_status_and_detail() {
        let (mock_server, client, store) = setup().await;

        Mock::given(method("POST"))
            .and(path("/google"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Invalid Google token"
            })))
            .mount(&mock_server)
            .await;

        let result = client.sign_in_with_google("bad-token").await;
        match result.unwrap_err() {
            ClientError::Api { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail.as_deref(), Some("Invalid Google token"));
            }
            e => panic!("Expected Api error, got: {e:?}"),
        }

        // Nothing was persisted
        assert!(store.access_token().await.unwrap().is_none());
        assert!(!client.is_authenticated().await.unwrap());
    }
}

// =============================================================================
// Sign-Out Tests
// =============================================================================

mod sign_out {
    use super::*;

    #[tokio::test]
    async fn test_sign_out_clears_credentials() {
        let (_mock_server, client, store) = setup().await;

        store.set_access_token("a").await.unwrap();
        store.set_refresh_token("r").await.unwrap();

        client.sign_out().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(store.user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_with_empty_store_is_idempotent() {
        let (_mock_server, client, store) = setup().await;

        client.sign_out().await.unwrap();
        client.sign_out().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(!client.is_authenticated().await.unwrap());
    }
}

// =============================================================================
// Authenticated Request Tests
// =============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_me_attaches_bearer_token() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer valid_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body("alice")))
            .mount(&mock_server)
            .await;

        let user = client.me().await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_plain_http_error_is_not_retried() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/posts/feed"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let result = client.posts().feed(None, None).await;
        match result.unwrap_err() {
            ClientError::Api { status, detail } => {
                assert_eq!(status, 500);
                // Non-JSON body falls back to raw text
                assert_eq!(detail.as_deref(), Some("Internal Server Error"));
            }
            e => panic!("Expected Api error, got: {e:?}"),
        }

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_structured_detail_is_extracted() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/posts/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "detail": "Post not found"
            })))
            .mount(&mock_server)
            .await;

        let err = client.posts().get("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.detail(), Some("Post not found"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        let client =
            AuxClient::new(ClientConfig::new("http://127.0.0.1:9"), store).expect("valid url");

        let result = client.me().await;
        match result.unwrap_err() {
            ClientError::Request(_) => {}
            e => panic!("Expected Request error, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/users/search"))
            .and(wiremock::matchers::query_param("q", "ali"))
            .and(wiremock::matchers::query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [user_body("alice")],
                "total": 1,
                "limit": 5,
                "offset": 0
            })))
            .mount(&mock_server)
            .await;

        let page = client.users().search("ali", Some(5)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 1);
        assert!(page.is_last_page());
    }
}

// =============================================================================
// Upload Tests
// =============================================================================

mod uploads {
    use super::*;
    use std::io::Write;

    fn create_temp_image(extension: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{}", extension))
            .tempfile()
            .unwrap();
        file.write_all(b"fake image bytes").unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_missing_file_fails_before_any_request() {
        let (mock_server, client, _store) = setup().await;

        let result = client
            .uploads()
            .upload_image(std::path::Path::new("/nonexistent/avatar.png"))
            .await;

        match result.unwrap_err() {
            ClientError::FileNotFound(path) => assert!(path.contains("nonexistent")),
            e => panic!("Expected FileNotFound, got: {e:?}"),
        }

        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_image_upload() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("POST"))
            .and(path("/storage/upload/image"))
            .and(header("Authorization", "Bearer valid_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://cdn.example.com/avatars/u1.jpg",
                "path": "avatars/u1.jpg",
                "bucket": "images"
            })))
            .mount(&mock_server)
            .await;

        let temp_file = create_temp_image("jpg");
        let response = client.uploads().upload_image(temp_file.path()).await.unwrap();

        assert_eq!(response.url, "https://cdn.example.com/avatars/u1.jpg");
        assert_eq!(response.bucket.as_deref(), Some("images"));
    }

    #[tokio::test]
    async fn test_delete_file() {
        let (mock_server, client, store) = setup().await;
        store.set_access_token("valid_token").await.unwrap();

        Mock::given(method("DELETE"))
            .and(path("/storage/delete"))
            .and(body_json(serde_json::json!({
                "path": "avatars/u1.jpg",
                "bucket": "images"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "deleted": true
            })))
            .mount(&mock_server)
            .await;

        client
            .uploads()
            .delete_file("avatars/u1.jpg", "images")
            .await
            .unwrap();
    }
}

// =============================================================================
// Auth-State Collaborator Tests
// =============================================================================

mod auth_state {
    use super::*;

    #[tokio::test]
    async fn test_current_user_reads_cached_profile() {
        let (_mock_server, client, store) = setup().await;

        assert!(client.current_user().await.unwrap().is_none());

        let user = aux_core::types::User::new("u1", "alice@example.com", "alice", "Alice");
        store.set_user(&user).await.unwrap();

        let cached = client.current_user().await.unwrap().unwrap();
        assert_eq!(cached.username, "alice");
    }

    #[tokio::test]
    async fn test_biometric_preference_round_trip() {
        let (_mock_server, client, _store) = setup().await;

        assert!(!client.biometric_enabled().await.unwrap());

        client.set_biometric_enabled(true).await.unwrap();
        assert!(client.biometric_enabled().await.unwrap());

        // Preference survives sign-out
        client.sign_out().await.unwrap();
        assert!(client.biometric_enabled().await.unwrap());
    }
}
