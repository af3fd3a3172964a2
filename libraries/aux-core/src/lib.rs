//! Aux Core
//!
//! Platform-agnostic domain types, traits, and error handling for the Aux
//! music-sharing client.
//!
//! This crate provides the foundational building blocks shared by the
//! storage and server-client crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Post`, `Comment`, `SpotifyTrack`, `Notification`
//! - **Core Traits**: `CredentialStore`
//! - **Error Handling**: Unified `AuxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aux_core::types::User;
//!
//! let user = User::new("u1", "alice@example.com", "alice", "Alice");
//! assert_eq!(user.username, "alice");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{AuxError, Result};
pub use storage::CredentialStore;

pub use types::{
    // Credentials
    Credentials,
    // Users
    User, UserWithStats,
    // Posts
    Comment, Post,
    // Spotify
    SpotifyStatus, SpotifyTrack,
    // Notifications
    Notification, NotificationActor, NotificationData, NotificationKind,
    // Envelopes
    Paginated,
};
