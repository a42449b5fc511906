//! Report service
//!
//! Implements the citizen-facing report flows:
//! - Image upload through a presigned storage URL
//! - Report submission, gated on a verified identity
//! - Department classification of a photo and its description
//! - Public tracking by tracking ID, and the on-chain audit trail
//! - The signed-in user's history
//! - Comments on community reports

use std::sync::Arc;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::config::UploadConfig;
use crate::models::{
    BlockchainStatus, Comment, CreateReportInput, MlPrediction, PresignGetResponse, PresignRequest,
    Report,
};

/// Shown when an unverified citizen tries to file a report
pub const AADHAAR_REQUIRED_MESSAGE: &str =
    "You must complete Aadhaar verification before submitting a report.";

pub struct ReportService {
    client: Arc<ApiClient>,
    upload: UploadConfig,
}

impl ReportService {
    pub fn new(client: Arc<ApiClient>, upload: UploadConfig) -> Self {
        Self { client, upload }
    }

    /// Upload an image and return its storage key
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        self.validate_image(&bytes, content_type)?;

        let file_name = format!(
            "image-{}.{}",
            Uuid::new_v4(),
            self.upload.get_extension(content_type)
        );
        let target = self
            .client
            .presign_upload(&PresignRequest {
                file_name,
                content_type: content_type.to_string(),
            })
            .await?;

        self.client.put_object(&target.url, bytes, content_type).await?;
        tracing::info!(key = %target.key, "Image uploaded");
        Ok(target.key)
    }

    fn validate_image(&self, bytes: &[u8], content_type: &str) -> Result<(), ApiError> {
        if !self.upload.is_type_allowed(content_type) {
            return Err(ApiError::validation(format!(
                "Unsupported image type: {}",
                content_type
            )));
        }
        if bytes.is_empty() {
            return Err(ApiError::validation("Image is empty"));
        }
        if bytes.len() as u64 > self.upload.max_file_size {
            return Err(ApiError::validation(format!(
                "Image is larger than {} bytes",
                self.upload.max_file_size
            )));
        }
        Ok(())
    }

    /// Classify a photo and its description.
    ///
    /// An unreachable classifier is not fatal: the report is routed to the
    /// `Manual` department with zero confidence instead. A verdict of
    /// `is_valid: false` is returned as a `Validation` error.
    pub async fn classify(
        &self,
        image: &[u8],
        title: &str,
        description: &str,
    ) -> Result<MlPrediction, ApiError> {
        let prediction = match self.client.predict_department(image, title, description).await {
            Ok(prediction) => prediction,
            Err(e) => {
                tracing::warn!(error = %e, "Classification unavailable, routing manually");
                return Ok(MlPrediction::manual());
            }
        };

        if !prediction.is_valid {
            tracing::info!(department = %prediction.department, "Image rejected by classifier");
            return Err(ApiError::validation(prediction.rejection_message()));
        }
        tracing::debug!(
            department = %prediction.department,
            confidence = prediction.confidence,
            "Image classified"
        );
        Ok(prediction)
    }

    /// Submit a report.
    ///
    /// Only citizens with a verified Aadhaar may file reports, so the profile
    /// is checked first.
    pub async fn submit(&self, input: &CreateReportInput) -> Result<Report, ApiError> {
        self.ensure_verified().await?;
        self.file(input).await
    }

    async fn ensure_verified(&self) -> Result<(), ApiError> {
        let profile = self.client.profile().await?;
        if !profile.is_aadhaar_verified {
            tracing::info!(profile_id = profile.id, "Report blocked, Aadhaar not verified");
            return Err(ApiError::validation(AADHAAR_REQUIRED_MESSAGE));
        }
        Ok(())
    }

    async fn file(&self, input: &CreateReportInput) -> Result<Report, ApiError> {
        let report = self.client.create_report(input).await?;
        tracing::info!(
            report_id = report.id,
            tracking_id = report.tracking_id.as_deref().unwrap_or("-"),
            "Report submitted"
        );
        Ok(report)
    }

    /// Classify and upload a photo, then submit the report pointing at it.
    ///
    /// Nothing is uploaded for an unverified citizen or a rejected photo.
    ///
    /// A department already set on `input` is kept; otherwise the
    /// classifier's department and confidence are filed with the report.
    pub async fn submit_with_image(
        &self,
        mut input: CreateReportInput,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Report, ApiError> {
        self.ensure_verified().await?;
        self.validate_image(&bytes, content_type)?;

        let prediction = self
            .classify(&bytes, &input.issue_title, &input.issue_description)
            .await?;
        if input.department.is_none() {
            input.department = Some(prediction.department);
            input.confidence_score = Some(prediction.confidence);
        }

        let key = self.upload_image(bytes, content_type).await?;
        input.image_url = Some(key);
        self.file(&input).await
    }

    pub async fn track(&self, tracking_id: &str) -> Result<Report, ApiError> {
        self.client.track_report(tracking_id).await
    }

    pub async fn blockchain_status(&self, tracking_id: &str) -> Result<BlockchainStatus, ApiError> {
        self.client.blockchain_status(tracking_id).await
    }

    pub async fn history(&self) -> Result<Vec<Report>, ApiError> {
        self.client.user_history().await
    }

    pub async fn image_urls(&self, report_id: i64) -> Result<PresignGetResponse, ApiError> {
        self.client.image_urls(report_id).await
    }

    pub async fn comments(&self, report_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.client.comments(report_id).await
    }

    pub async fn post_comment(&self, report_id: i64, text: &str) -> Result<Comment, ApiError> {
        self.client.post_comment(report_id, text).await
    }
}
