//! Raw authentication endpoints.
//!
//! These calls sit underneath the retry pipeline: the sign-in exchange
//! needs no bearer token, and the refresh call must never recurse into
//! the 401 handling it implements.

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::request::read_detail;
use crate::types::{AuthResponse, GoogleSignInRequest, RefreshTokenRequest, RefreshTokenResponse};

/// Authentication endpoints of the Aux backend.
pub(crate) struct AuthEndpoints<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Exchange a Google ID token for backend tokens and the user profile.
    pub async fn exchange_google(&self, id_token: &str) -> Result<AuthResponse> {
        let url = format!("{}/google", self.base_url);
        debug!(url = %url, "Exchanging Google ID token");

        let request = GoogleSignInRequest {
            id_token: id_token.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse sign-in response: {}", e))
            })
        } else {
            let status = status.as_u16();
            let detail = read_detail(response).await;
            warn!(status, detail = ?detail, "Sign-in failed");
            Err(ClientError::Api { status, detail })
        }
    }

    /// Exchange the refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshTokenResponse> {
        let url = format!("{}/auth/refresh", self.base_url);
        debug!(url = %url, "Refreshing access token");

        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse refresh response: {}", e))
            })
        } else {
            let status = status.as_u16();
            let detail = read_detail(response).await;
            Err(ClientError::Api { status, detail })
        }
    }
}
