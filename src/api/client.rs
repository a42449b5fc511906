//! HTTP client for the ReportMitra backend
//!
//! Owns transport details only: URL building, bearer-token injection, status
//! mapping, JSON decoding and the 401 refresh-and-retry cycle.
//!
//! # Token refresh
//!
//! A bearer request that comes back 401 is retried once after refreshing the
//! access token. Refreshes are single-flight: the first request to see a 401
//! takes `refresh_lock` and performs the refresh while later ones wait on the
//! lock. A waiter that finds a different access token in the store than the
//! one it was rejected with reuses it without refreshing again. If the
//! refresh fails, or the retried request is rejected as well, the stored
//! tokens are cleared and the caller gets `ApiError::Unauthorized`.

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::endpoints;
use super::error::ApiError;
use crate::config::ApiConfig;
use crate::models::TokenRefreshResponse;
use crate::storage::{StoredTokens, TokenStore};

/// How a request authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No `Authorization` header, no refresh on 401
    Anonymous,
    /// Stored access token attached when present, refresh on 401
    Bearer,
}

/// Shared API client. Cheap to share behind `Arc`.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_url: String,
    /// Path component of `api_url`, used to rebase pagination cursors
    api_path: String,
    tokens: Arc<dyn TokenStore>,
    refresh_lock: Mutex<()>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if the base URL and prefix do not form a valid URL
    /// - `Network` if the reqwest client cannot be constructed
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let prefix = config.api_prefix.trim_matches('/');
        let api_url = if prefix.is_empty() {
            base_url.clone()
        } else {
            format!("{}/{}", base_url, prefix)
        };

        let parsed = Url::parse(&api_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(api_url));
        }
        let api_path = parsed.path().trim_end_matches('/').to_string();

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_url,
            api_path,
            tokens,
            refresh_lock: Mutex::new(()),
        })
    }

    /// Token store backing this client
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path under the API root
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Absolute URL for a path under the server root
    pub fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Rebase a server-generated pagination cursor onto our API root.
    ///
    /// The server may build `next` links with an internal host name, so only
    /// the path below the API prefix and the query string are kept.
    pub fn resolve_cursor(&self, cursor: &str) -> Result<String, ApiError> {
        let base = Url::parse(&self.api_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        let url = base
            .join(cursor)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", cursor, e)))?;

        let path = url.path();
        let relative = path
            .strip_prefix(self.api_path.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(path);

        let mut resolved = self.api_url(relative);
        if let Some(query) = url.query() {
            resolved.push('?');
            resolved.push_str(query);
        }
        Ok(resolved)
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    /// GET a path under the API root
    pub async fn get<T>(&self, path: &str, auth: Auth) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.api_url(path);
        self.get_url(&url, auth).await
    }

    /// GET an absolute URL
    pub async fn get_url<T>(&self, url: &str, auth: Auth) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute(auth, || self.http.get(url)).await
    }

    /// POST a JSON body to a path under the API root
    pub async fn post<B, T>(&self, path: &str, body: &B, auth: Auth) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.api_url(path);
        self.execute(auth, || self.http.post(&url).json(body)).await
    }

    /// POST without a body
    pub async fn post_empty<T>(&self, path: &str, auth: Auth) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.api_url(path);
        self.execute(auth, || self.http.post(&url)).await
    }

    /// POST multipart text fields
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
        auth: Auth,
    ) -> Result<T, ApiError> {
        let url = self.api_url(path);
        // Forms are not cloneable, so the retry path builds a fresh one
        self.execute(auth, || {
            let form = fields
                .iter()
                .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                    form.text(*name, value.clone())
                });
            self.http.post(&url).multipart(form)
        })
        .await
    }

    /// Send a request built by `build` and decode the JSON response.
    ///
    /// `build` may be called twice when a token refresh triggers a retry.
    pub async fn execute<T, F>(&self, auth: Auth, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.dispatch(auth, &build).await?;
        decode(response).await
    }

    async fn dispatch<F>(&self, auth: Auth, build: &F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let token = match auth {
            Auth::Anonymous => None,
            Auth::Bearer => self.tokens.access_token().await?,
        };

        let response = self.send_once(build, token.as_deref()).await?;
        if auth == Auth::Anonymous || response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        tracing::debug!("Access token rejected, attempting refresh");
        let fresh = self.recover_from_unauthorized(token.as_deref()).await?;

        let retried = self.send_once(build, Some(&fresh)).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Request rejected again after token refresh, clearing session");
            self.tokens.clear().await?;
            return Err(ApiError::Unauthorized);
        }
        check_status(retried).await
    }

    async fn send_once<F>(&self, build: &F, token: Option<&str>) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut builder = build();
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let request = builder.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "API request");
        Ok(self.http.execute(request).await?)
    }

    /// Obtain a usable access token after `rejected` was refused.
    async fn recover_from_unauthorized(
        &self,
        rejected: Option<&str>,
    ) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        match (self.tokens.access_token().await?, rejected) {
            (Some(current), Some(rejected)) if current != rejected => {
                tracing::debug!("Using access token refreshed by a concurrent request");
                return Ok(current);
            }
            (Some(current), None) => return Ok(current),
            // A failed refresh or a logout emptied the store while we waited
            (None, Some(_)) => return Err(ApiError::Unauthorized),
            _ => {}
        }

        match self.refresh_access_token().await {
            Ok(access) => Ok(access),
            Err(e) => {
                tracing::warn!(error = %e, "Token refresh failed, clearing session");
                self.tokens.clear().await?;
                Err(ApiError::Unauthorized)
            }
        }
    }

    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self
            .tokens
            .refresh_token()
            .await?
            .ok_or(ApiError::Unauthorized)?;

        let url = self.api_url(endpoints::TOKEN_REFRESH);
        let body = json!({ "refresh": refresh });
        let response = self
            .send_once(&|| self.http.post(&url).json(&body), None)
            .await?;
        let refreshed: TokenRefreshResponse = decode(check_status(response).await?).await?;

        match refreshed.refresh {
            Some(rotated) => {
                self.tokens
                    .store(StoredTokens {
                        access: Some(refreshed.access.clone()),
                        refresh: Some(rotated),
                    })
                    .await?
            }
            None => self.tokens.set_access_token(&refreshed.access).await?,
        }

        tracing::info!("Access token refreshed");
        Ok(refreshed.access)
    }
}

/// Map non-2xx responses to `ApiError::Server`
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await?;
    tracing::debug!(status = status.as_u16(), "API error response");
    Err(ApiError::from_response_body(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, len = bytes.len(), "Failed to decode response");
        ApiError::Decode(e)
    })
}
