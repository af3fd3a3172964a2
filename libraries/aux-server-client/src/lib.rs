//! Aux Server Client
//!
//! HTTP client library for the Aux backend API.
//!
//! # Features
//!
//! - **Authentication**: Google sign-in exchange, persisted tokens,
//!   transparent token refresh shared across concurrent requests
//! - **Social graph**: profiles, search, follow/unfollow
//! - **Posts**: feed, sharing, likes, comments
//! - **Spotify**: connection management and catalog lookups, with a
//!   bounded retry for provider token races
//! - **Notifications** and **image upload**
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use aux_server_client::{AuxClient, ClientConfig};
//! use aux_storage::{create_pool, run_migrations, SqliteCredentialStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool("sqlite://aux.db").await?;
//!     run_migrations(&pool).await?;
//!     let store = Arc::new(SqliteCredentialStore::new(pool));
//!
//!     let client = AuxClient::new(ClientConfig::from_env(), store)?;
//!     let auth = client.sign_in_with_google(&id_token).await?;
//!     println!("Signed in as {}", auth.user.username);
//!
//!     let feed = client.posts().feed(None, None).await?;
//!     println!("{} posts in feed", feed.items.len());
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod notifications;
mod posts;
mod request;
mod spotify;
mod types;
mod uploads;
mod users;

// Re-export main types
pub use client::AuxClient;
pub use error::{ClientError, Result};
pub use types::{
    AuthResponse, ClientConfig, CreatePostRequest, GoogleSignInRequest, ImageUploadResponse,
    RefreshTokenRequest, RefreshTokenResponse, SpotifyAuthUrl, UnreadCount, UpdatePostRequest,
    UpdateProfileRequest, DEFAULT_BASE_URL,
};

// Re-export sub-clients for direct use if needed
pub use notifications::NotificationsClient;
pub use posts::PostsClient;
pub use spotify::SpotifyClient;
pub use uploads::UploadsClient;
pub use users::UsersClient;
