//! Account endpoints: login, registration, OTP, profile and Aadhaar verification

use serde_json::json;

use super::client::{ApiClient, Auth};
use super::endpoints;
use super::error::ApiError;
use crate::models::{
    AuthResponse, LoginInput, OtpRequestResponse, RegisterInput, User, UserProfile,
    VerifyAadhaarInput, VerifyAadhaarResponse,
};

impl ApiClient {
    /// POST /users/login/
    pub async fn login(&self, input: &LoginInput) -> Result<AuthResponse, ApiError> {
        self.post(endpoints::LOGIN, input, Auth::Anonymous).await
    }

    /// POST /users/register/
    pub async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
        if input.password != input.password2 {
            return Err(ApiError::validation("Passwords do not match"));
        }
        self.post(endpoints::REGISTER, input, Auth::Anonymous).await
    }

    /// GET /users/me/
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(endpoints::CURRENT_USER, Auth::Bearer).await
    }

    /// POST /users/request-otp/
    pub async fn request_otp(&self, email: &str) -> Result<OtpRequestResponse, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::validation("Email is required"));
        }
        self.post(endpoints::REQUEST_OTP, &json!({ "email": email }), Auth::Anonymous)
            .await
    }

    /// POST /users/verify-otp/
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
        let (email, otp) = (email.trim(), otp.trim());
        if email.is_empty() || otp.is_empty() {
            return Err(ApiError::validation("Email and code are required"));
        }
        self.post(
            endpoints::VERIFY_OTP,
            &json!({ "email": email, "otp": otp }),
            Auth::Anonymous,
        )
        .await
    }

    /// GET /profile/me/
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get(endpoints::PROFILE, Auth::Bearer).await
    }

    /// POST /aadhaar/verify/
    ///
    /// A rejected number comes back as `verified: false` with an `error`
    /// message rather than as an HTTP error; that is surfaced as `Validation`.
    pub async fn verify_aadhaar(
        &self,
        aadhaar_number: &str,
    ) -> Result<VerifyAadhaarResponse, ApiError> {
        let input = VerifyAadhaarInput::new(aadhaar_number);
        if !input.is_well_formed() {
            return Err(ApiError::validation("Aadhaar number must be 12 digits"));
        }

        let response: VerifyAadhaarResponse = self
            .post(endpoints::VERIFY_AADHAAR, &input, Auth::Bearer)
            .await?;
        if !response.verified {
            let message = response
                .error
                .unwrap_or_else(|| "Aadhaar verification failed".to_string());
            return Err(ApiError::validation(message));
        }
        Ok(response)
    }
}
