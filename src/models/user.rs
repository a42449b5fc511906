//! User and authentication models
//!
//! Mirrors the `/users/*` responses of the backend. The client never edits a
//! user locally; a reload replaces the whole value.

use serde::{Deserialize, Serialize};

/// Account as returned by `/users/me/` and the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Email address (login identifier)
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_email_verified: Option<bool>,
    /// `password`, `otp` or `google`
    #[serde(default)]
    pub auth_method: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl User {
    /// Name to show for this user.
    ///
    /// Prefers the full name, then the username, then the email address.
    pub fn display_name(&self) -> String {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full_name.is_empty() {
            return full_name;
        }

        match self.username.as_deref().map(str::trim) {
            Some(username) if !username.is_empty() => username.to_string(),
            _ => self.email.clone(),
        }
    }
}

/// Access/refresh token pair issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Response of login, register and OTP verification.
///
/// The backend has shipped two shapes: flat `{access, refresh, user}` and
/// nested `{message, user, tokens: {access, refresh}}`. Both decode here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawAuthResponse")]
pub struct AuthResponse {
    pub message: Option<String>,
    pub user: Option<User>,
    pub tokens: AuthTokens,
}

#[derive(Deserialize)]
struct RawAuthResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    tokens: Option<AuthTokens>,
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    refresh: Option<String>,
}

impl TryFrom<RawAuthResponse> for AuthResponse {
    type Error = String;

    fn try_from(raw: RawAuthResponse) -> Result<Self, Self::Error> {
        let tokens = match (raw.tokens, raw.access, raw.refresh) {
            (Some(tokens), _, _) => tokens,
            (None, Some(access), Some(refresh)) => AuthTokens { access, refresh },
            _ => return Err("auth response is missing access/refresh tokens".to_string()),
        };

        Ok(Self {
            message: raw.message,
            user: raw.user,
            tokens,
        })
    }
}

/// Response of `/users/token/refresh/`.
///
/// `refresh` is present only when the backend rotates refresh tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response of `/users/request-otp/`.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpRequestResponse {
    pub message: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// Email/password login credentials
#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Password confirmation
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl RegisterInput {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password2: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password2: password2.into(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }
}

/// Citizen profile from `/profile/me/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub is_aadhaar_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Identity record, present once verified
    #[serde(default)]
    pub aadhaar: Option<AadhaarData>,
}

/// Identity record linked to a verified profile
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AadhaarData {
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `/aadhaar/verify/`
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyAadhaarResponse {
    pub verified: bool,
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub aadhaar: Option<AadhaarData>,
    #[serde(default)]
    pub profile: Option<AadhaarProfile>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Profile flags echoed by a verification
#[derive(Debug, Clone, Deserialize)]
pub struct AadhaarProfile {
    pub is_aadhaar_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for `/aadhaar/verify/`
#[derive(Debug, Clone, Serialize)]
pub struct VerifyAadhaarInput {
    pub aadhaar_number: String,
}

impl VerifyAadhaarInput {
    /// Strips spaces and dashes, so `1234 5678 9012` is accepted.
    pub fn new(aadhaar_number: &str) -> Self {
        Self {
            aadhaar_number: aadhaar_number
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '-')
                .collect(),
        }
    }

    /// Aadhaar numbers are exactly twelve digits
    pub fn is_well_formed(&self) -> bool {
        self.aadhaar_number.len() == 12 && self.aadhaar_number.bytes().all(|b| b.is_ascii_digit())
    }
}
