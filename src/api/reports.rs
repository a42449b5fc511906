//! Report endpoints: submission, classification, tracking, community feed
//! and history

use serde::Deserialize;

use super::client::{ApiClient, Auth};
use super::endpoints;
use super::error::ApiError;
use crate::models::{
    BlockchainStatus, CreateReportInput, MlPredictInput, MlPrediction, Page, PresignGetResponse,
    Report,
};

/// History comes back either as a bare list or as a page
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListOrPage<T> {
    List(Vec<T>),
    Page(Page<T>),
}

impl<T> ListOrPage<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::List(items) => items,
            Self::Page(page) => page.results,
        }
    }
}

impl ApiClient {
    /// POST /reports/ as multipart form data
    pub async fn create_report(&self, input: &CreateReportInput) -> Result<Report, ApiError> {
        if input.issue_title.trim().is_empty() || input.location.trim().is_empty() {
            return Err(ApiError::validation("Title and location are required"));
        }
        self.post_form(endpoints::REPORTS, &input.form_fields(), Auth::Bearer)
            .await
    }

    /// POST /ml/predict/ with the photo as base64
    pub async fn predict_department(
        &self,
        image: &[u8],
        title: &str,
        description: &str,
    ) -> Result<MlPrediction, ApiError> {
        let input = MlPredictInput {
            image_base64: data_encoding::BASE64.encode(image),
            title: title.to_string(),
            description: description.to_string(),
        };
        self.post(endpoints::ML_PREDICT, &input, Auth::Bearer).await
    }

    /// GET /track/detail/{id}/ on the server root. No authentication.
    pub async fn track_report(&self, tracking_id: &str) -> Result<Report, ApiError> {
        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            return Err(ApiError::validation("Tracking ID is required"));
        }
        let url = self.root_url(&endpoints::tracking_detail(tracking_id));
        self.get_url(&url, Auth::Anonymous).await
    }

    /// GET /blockchain/reports/{id}/status/
    pub async fn blockchain_status(&self, tracking_id: &str) -> Result<BlockchainStatus, ApiError> {
        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            return Err(ApiError::validation("Tracking ID is required"));
        }
        self.get(&endpoints::blockchain_status(tracking_id), Auth::Bearer)
            .await
    }

    /// One page of resolved community reports.
    ///
    /// `cursor` is the previous page's `next` link; `None` fetches the first
    /// page.
    pub async fn community_resolved(
        &self,
        cursor: Option<&str>,
    ) -> Result<Page<Report>, ApiError> {
        let url = match cursor {
            Some(cursor) => self.resolve_cursor(cursor)?,
            None => self.api_url(endpoints::COMMUNITY_RESOLVED),
        };
        self.get_url(&url, Auth::Bearer).await
    }

    /// GET /reports/history/ for the signed-in user
    pub async fn user_history(&self) -> Result<Vec<Report>, ApiError> {
        let reports: ListOrPage<Report> = self.get(endpoints::USER_HISTORY, Auth::Bearer).await?;
        Ok(reports.into_vec())
    }

    /// Presigned read URLs for a report's photos
    pub async fn image_urls(&self, report_id: i64) -> Result<PresignGetResponse, ApiError> {
        self.get(&endpoints::presign_get(report_id), Auth::Anonymous).await
    }
}
