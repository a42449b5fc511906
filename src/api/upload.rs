//! Direct-to-storage image upload
//!
//! The backend hands out a presigned PUT URL; the bytes go straight to
//! object storage without our bearer token.

use reqwest::header::CONTENT_TYPE;

use super::client::{ApiClient, Auth};
use super::endpoints;
use super::error::ApiError;
use crate::models::{PresignRequest, PresignResponse};

impl ApiClient {
    /// POST /reports/s3/presign/
    pub async fn presign_upload(
        &self,
        request: &PresignRequest,
    ) -> Result<PresignResponse, ApiError> {
        self.post(endpoints::PRESIGN_UPLOAD, request, Auth::Bearer)
            .await
    }

    /// PUT raw bytes to a presigned URL
    pub async fn put_object(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        let size = bytes.len();
        let response = self
            .http()
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Storage rejected upload");
            return Err(ApiError::Upload(format!(
                "storage responded {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        tracing::debug!(size, content_type, "Uploaded object");
        Ok(())
    }
}
