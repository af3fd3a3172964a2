//! Main Aux backend client.
//!
//! All outbound calls flow through one dispatch loop that attaches the
//! persisted bearer token, funnels 401s into a single shared token
//! refresh, and gives Spotify-bound requests one delayed retry while the
//! backend finishes its own provider-token refresh.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use aux_core::types::User;
use aux_core::CredentialStore;

use crate::auth::AuthEndpoints;
use crate::error::{ClientError, Result};
use crate::notifications::NotificationsClient;
use crate::posts::PostsClient;
use crate::request::{provider_retryable, read_detail, Body, PartKind, Provider, RequestSpec};
use crate::spotify::SpotifyClient;
use crate::types::{AuthResponse, ClientConfig};
use crate::uploads::UploadsClient;
use crate::users::UsersClient;

/// Overall per-request timeout. Timeouts surface as transport errors and
/// never enter the refresh protocol.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long to wait before the single provider retry, so the backend's
/// own Spotify token refresh can complete.
const PROVIDER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// A refresh failure in a shape every queued waiter can receive.
#[derive(Debug, Clone)]
struct RefreshFailure {
    status: Option<u16>,
    detail: String,
}

impl RefreshFailure {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: detail.into(),
        }
    }

    fn from_error(err: &ClientError) -> Self {
        Self {
            status: err.status(),
            detail: err
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
        }
    }
}

impl From<RefreshFailure> for ClientError {
    fn from(failure: RefreshFailure) -> Self {
        ClientError::TokenRefreshFailed {
            status: failure.status,
            detail: failure.detail,
        }
    }
}

type RefreshWaiter = oneshot::Sender<std::result::Result<String, RefreshFailure>>;

/// Shared refresh coordination state.
///
/// At most one refresh call may be in flight per client; `refreshing`
/// gates entry and `waiters` holds the continuations of every request
/// that hit a 401 while the refresh was pending, in arrival order.
/// `generation` is bumped by sign-out so a refresh that raced it cannot
/// reinstate credentials.
struct AuthFlow {
    refreshing: bool,
    waiters: VecDeque<RefreshWaiter>,
    generation: u64,
}

/// Client for the Aux backend API.
///
/// The client owns the credential slot: it attaches the persisted access
/// token to every request, refreshes it on 401 (coordinating concurrent
/// callers behind a single refresh call), and erases all credential
/// state when a refresh irrecoverably fails.
///
/// # Example
///
/// ```ignore
/// use aux_server_client::{AuxClient, ClientConfig};
///
/// let store = Arc::new(SqliteCredentialStore::new(pool));
/// let client = AuxClient::new(ClientConfig::from_env(), store)?;
///
/// let auth = client.sign_in_with_google(id_token).await?;
/// println!("Signed in as {}", auth.user.username);
///
/// let feed = client.posts().feed(None, None).await?;
/// println!("{} posts", feed.items.len());
/// ```
pub struct AuxClient {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    auth: Mutex<AuthFlow>,
}

impl std::fmt::Debug for AuxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuxClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AuxClient {
    /// Create a new client over the given credential store.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("Aux/{} (Mobile)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            store,
            auth: Mutex::new(AuthFlow {
                refreshing: false,
                waiters: VecDeque::new(),
                generation: 0,
            }),
        })
    }

    /// Get the backend base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check whether an access token is currently persisted.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.store.access_token().await?.is_some())
    }

    /// Get the cached profile of the signed-in user, if any.
    pub async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.store.user().await?)
    }

    /// Whether the user opted into biometric unlock.
    pub async fn biometric_enabled(&self) -> Result<bool> {
        Ok(self.store.biometric_enabled().await?)
    }

    /// Record the biometric unlock preference.
    pub async fn set_biometric_enabled(&self, enabled: bool) -> Result<()> {
        Ok(self.store.set_biometric_enabled(enabled).await?)
    }

    // =========================================================================
    // Auth-state operations
    // =========================================================================

    /// Exchange a Google ID token for backend tokens and persist them.
    pub async fn sign_in_with_google(&self, id_token: &str) -> Result<AuthResponse> {
        let auth = AuthEndpoints::new(&self.http, &self.base_url);
        let response = auth.exchange_google(id_token).await?;

        self.store.set_access_token(&response.access_token).await?;
        self.store.set_refresh_token(&response.refresh_token).await?;
        self.store.set_user(&response.user).await?;

        info!(username = %response.user.username, "Signed in");
        Ok(response)
    }

    /// Fetch the authenticated user's profile.
    pub async fn me(&self) -> Result<User> {
        self.execute(RequestSpec::get("/me")).await
    }

    /// Erase the credential slot.
    ///
    /// Idempotent: signing out with nothing stored succeeds and leaves
    /// storage empty. A token refresh in flight when this is called will
    /// complete as failed rather than reinstating credentials.
    pub async fn sign_out(&self) -> Result<()> {
        {
            let mut flow = self.lock_auth();
            flow.generation = flow.generation.wrapping_add(1);
        }
        self.store.clear_credentials().await?;
        info!("Signed out");
        Ok(())
    }

    // =========================================================================
    // Endpoint groups
    // =========================================================================

    /// User search, profiles, and the follow graph.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    /// Feed, posts, likes, and comments.
    pub fn posts(&self) -> PostsClient<'_> {
        PostsClient::new(self)
    }

    /// Spotify connection and catalog lookups through the backend.
    pub fn spotify(&self) -> SpotifyClient<'_> {
        SpotifyClient::new(self)
    }

    /// Notification listing and read state.
    pub fn notifications(&self) -> NotificationsClient<'_> {
        NotificationsClient::new(self)
    }

    /// Image upload and deletion.
    pub fn uploads(&self) -> UploadsClient<'_> {
        UploadsClient::new(self)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Send a request through the retry pipeline and parse the JSON body.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let response = self.dispatch(&spec).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse response: {}", e)))
    }

    /// Send a request through the retry pipeline, discarding the body.
    pub(crate) async fn execute_unit(&self, spec: RequestSpec) -> Result<()> {
        self.dispatch(&spec).await?;
        Ok(())
    }

    /// The request pipeline: attach bearer, send, and resolve auth or
    /// provider failures before surfacing an error.
    ///
    /// Each retry path may fire at most once per request; transport
    /// errors and non-matching HTTP errors surface immediately.
    async fn dispatch(&self, spec: &RequestSpec) -> Result<reqwest::Response> {
        let mut auth_retried = false;
        let mut provider_retried = false;
        let mut token_override: Option<String> = None;

        loop {
            let token = match token_override.take() {
                Some(token) => Some(token),
                None => self.store.access_token().await?,
            };

            debug!(method = %spec.method, path = %spec.path, "Sending request");
            let response = self.build_request(spec, token.as_deref())?.send().await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let status = status.as_u16();
            let detail = read_detail(response).await;

            // A keyword-matching 400/401 on a Spotify-bound request is a
            // provider-token error: it gets the delayed retry and is
            // surfaced unchanged if that retry fails. It never enters the
            // main refresh protocol.
            if spec.provider == Some(Provider::Spotify)
                && provider_retryable(status, detail.as_deref())
            {
                if provider_retried {
                    return Err(ClientError::Api { status, detail });
                }
                provider_retried = true;
                warn!(
                    path = %spec.path,
                    status,
                    "Provider token race, retrying once after delay"
                );
                tokio::time::sleep(PROVIDER_RETRY_DELAY).await;
                continue;
            }

            if status == 401 && !auth_retried {
                auth_retried = true;
                warn!(path = %spec.path, "Access token rejected, refreshing");
                token_override = Some(self.refresh_access_token().await?);
                continue;
            }

            return Err(ClientError::Api { status, detail });
        }
    }

    /// Build a fresh `reqwest` request from a spec for one attempt.
    fn build_request(
        &self,
        spec: &RequestSpec,
        token: Option<&str>,
    ) -> Result<reqwest::RequestBuilder> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut request = self.http.request(spec.method.clone(), url);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request = match &spec.body {
            Body::None => request,
            Body::Json(value) => request.json(value),
            Body::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    form = match &part.kind {
                        PartKind::Text(text) => form.text(part.name.clone(), text.clone()),
                        PartKind::Bytes {
                            bytes,
                            file_name,
                            mime,
                        } => {
                            let file_part = Part::bytes(bytes.clone())
                                .file_name(file_name.clone())
                                .mime_str(mime)?;
                            form.part(part.name.clone(), file_part)
                        }
                    };
                }
                request.multipart(form)
            }
        };

        Ok(request)
    }

    // =========================================================================
    // Refresh coordination
    // =========================================================================

    fn lock_auth(&self) -> MutexGuard<'_, AuthFlow> {
        self.auth.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Refresh the access token, sharing one refresh call across every
    /// concurrent request that observed a 401.
    ///
    /// The first caller claims the refresh; later callers queue and are
    /// resumed in arrival order with the refreshed token, or with the
    /// refresh error after teardown.
    async fn refresh_access_token(&self) -> Result<String> {
        // Claim the refresh or join the queue, in one synchronous step.
        let (waiter, started_generation) = {
            let mut flow = self.lock_auth();
            let generation = flow.generation;
            if flow.refreshing {
                let (tx, rx) = oneshot::channel();
                flow.waiters.push_back(tx);
                (Some(rx), generation)
            } else {
                flow.refreshing = true;
                (None, generation)
            }
        };

        if let Some(rx) = waiter {
            debug!("Refresh already in flight, waiting");
            return match rx.await {
                Ok(Ok(token)) => Ok(token),
                Ok(Err(failure)) => Err(failure.into()),
                Err(_) => Err(ClientError::TokenRefreshFailed {
                    status: None,
                    detail: "refresh coordinator dropped".to_string(),
                }),
            };
        }

        let outcome = self.run_refresh(started_generation).await;

        // Leave REFRESHING and take the queue in one synchronous step.
        let waiters = {
            let mut flow = self.lock_auth();
            flow.refreshing = false;
            std::mem::take(&mut flow.waiters)
        };

        match outcome {
            Ok(token) => {
                info!(resumed = waiters.len(), "Token refresh succeeded");
                for waiter in waiters {
                    let _ = waiter.send(Ok(token.clone()));
                }
                Ok(token)
            }
            Err(failure) => {
                warn!(
                    rejected = waiters.len(),
                    detail = %failure.detail,
                    "Token refresh failed, credentials cleared"
                );
                for waiter in waiters {
                    let _ = waiter.send(Err(failure.clone()));
                }
                Err(failure.into())
            }
        }
    }

    /// Perform the refresh HTTP call and persist the result.
    ///
    /// Any failure mode (missing refresh token, transport error, error
    /// response) tears the credential slot down. A sign-out that bumped
    /// the generation while the call was in flight also wins: the fresh
    /// tokens are discarded and the refresh reports failure.
    async fn run_refresh(
        &self,
        started_generation: u64,
    ) -> std::result::Result<String, RefreshFailure> {
        let refresh_token = match self.store.refresh_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.teardown_credentials().await;
                return Err(RefreshFailure::new("no refresh token in storage"));
            }
            Err(err) => return Err(RefreshFailure::new(err.to_string())),
        };

        let auth = AuthEndpoints::new(&self.http, &self.base_url);
        let refreshed = match auth.refresh(&refresh_token).await {
            Ok(refreshed) => refreshed,
            Err(err) => {
                self.teardown_credentials().await;
                return Err(RefreshFailure::from_error(&err));
            }
        };

        if let Err(err) = self.store.set_access_token(&refreshed.access_token).await {
            return Err(RefreshFailure::new(err.to_string()));
        }
        if let Some(rotated) = &refreshed.refresh_token {
            if let Err(err) = self.store.set_refresh_token(rotated).await {
                return Err(RefreshFailure::new(err.to_string()));
            }
        }

        let stale = self.lock_auth().generation != started_generation;
        if stale {
            // Sign-out raced the refresh; its clear must stand.
            self.teardown_credentials().await;
            return Err(RefreshFailure::new("signed out during refresh"));
        }

        Ok(refreshed.access_token)
    }

    async fn teardown_credentials(&self) {
        if let Err(err) = self.store.clear_credentials().await {
            warn!(error = %err, "Failed to clear credential slot");
        }
    }
}
