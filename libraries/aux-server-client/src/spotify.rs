//! Spotify connection and catalog lookups through the backend.
//!
//! The backend holds the provider tokens and refreshes them server-side;
//! every request built here carries the Spotify provider marker so the
//! dispatch loop can tolerate the brief window where a request lands
//! just before that refresh completes.

use aux_core::types::{SpotifyStatus, SpotifyTrack};

use crate::client::AuxClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{SpotifyAuthUrl, SpotifyCallbackRequest};

/// Spotify endpoints of the Aux backend.
pub struct SpotifyClient<'a> {
    client: &'a AuxClient,
}

impl<'a> SpotifyClient<'a> {
    pub(crate) fn new(client: &'a AuxClient) -> Self {
        Self { client }
    }

    /// Get the authorization URL for connecting a Spotify account.
    pub async fn connect_url(&self) -> Result<SpotifyAuthUrl> {
        self.client
            .execute(RequestSpec::get("/spotify/connect").spotify())
            .await
    }

    /// Complete the OAuth callback with the authorization code.
    pub async fn callback(&self, code: &str) -> Result<SpotifyStatus> {
        let body = SpotifyCallbackRequest {
            code: code.to_string(),
        };
        let spec = RequestSpec::post("/spotify/callback").json_of(&body)?.spotify();
        self.client.execute(spec).await
    }

    /// Check whether the account has a Spotify connection.
    pub async fn status(&self) -> Result<SpotifyStatus> {
        self.client
            .execute(RequestSpec::get("/spotify/status").spotify())
            .await
    }

    /// Disconnect the Spotify account.
    pub async fn disconnect(&self) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete("/spotify/disconnect").spotify())
            .await
    }

    /// Search the Spotify catalog.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<SpotifyTrack>> {
        let spec = RequestSpec::get("/spotify/search")
            .query("q", query)
            .query_opt("limit", limit)
            .spotify();
        self.client.execute(spec).await
    }

    /// Fetch the user's top tracks.
    pub async fn top_tracks(&self, limit: Option<u32>) -> Result<Vec<SpotifyTrack>> {
        let spec = RequestSpec::get("/spotify/top-tracks")
            .query_opt("limit", limit)
            .spotify();
        self.client.execute(spec).await
    }

    /// Fetch the track currently playing on the user's Spotify account.
    pub async fn now_playing(&self) -> Result<Option<SpotifyTrack>> {
        self.client
            .execute(RequestSpec::get("/spotify/now-playing").spotify())
            .await
    }
}
