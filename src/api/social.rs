//! Reactions and comments on community reports

use super::client::{ApiClient, Auth};
use super::endpoints;
use super::error::ApiError;
use super::reports::ListOrPage;
use crate::models::{Comment, CreateCommentInput, ReactionKind, ReactionResponse};

impl ApiClient {
    /// POST /reports/{id}/like/
    pub async fn like_report(&self, report_id: i64) -> Result<ReactionResponse, ApiError> {
        self.react(report_id, ReactionKind::Like).await
    }

    /// POST /reports/{id}/dislike/
    pub async fn dislike_report(&self, report_id: i64) -> Result<ReactionResponse, ApiError> {
        self.react(report_id, ReactionKind::Dislike).await
    }

    /// Toggle a reaction. The server decides the resulting state.
    pub async fn react(
        &self,
        report_id: i64,
        kind: ReactionKind,
    ) -> Result<ReactionResponse, ApiError> {
        let path = match kind {
            ReactionKind::Like => endpoints::like(report_id),
            ReactionKind::Dislike => endpoints::dislike(report_id),
        };
        self.post_empty(&path, Auth::Bearer).await
    }

    /// GET /reports/{id}/comments/
    pub async fn comments(&self, report_id: i64) -> Result<Vec<Comment>, ApiError> {
        let comments: ListOrPage<Comment> =
            self.get(&endpoints::comments(report_id), Auth::Bearer).await?;
        Ok(comments.into_vec())
    }

    /// POST /reports/{id}/comments/
    pub async fn post_comment(&self, report_id: i64, text: &str) -> Result<Comment, ApiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::validation("Comment cannot be empty"));
        }
        let input = CreateCommentInput {
            text: text.to_string(),
        };
        self.post(&endpoints::comments(report_id), &input, Auth::Bearer)
            .await
    }
}
