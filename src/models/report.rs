//! Issue report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue report as returned by the report, tracking and community endpoints.
///
/// Social counters and per-user flags are only present on community and
/// tracking responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    /// Reporter's user id
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(alias = "title")]
    pub issue_title: String,
    pub location: String,
    #[serde(default, alias = "description")]
    pub issue_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Photo of the completed work, set when the issue is resolved
    #[serde(default)]
    pub completion_url: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    pub status: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub allocated_to: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub dislikes_count: Option<i64>,
    #[serde(default)]
    pub comments_count: Option<i64>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default)]
    pub is_disliked: Option<bool>,
}

impl Report {
    /// Creation time: `issue_date`, falling back to `updated_at`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.issue_date
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| self.updated_at.as_deref().and_then(parse_timestamp))
    }

    /// Status rendered for display
    pub fn status_label(&self) -> String {
        status_label(&self.status)
    }

    /// Colour family for the status badge
    pub fn status_tone(&self) -> StatusTone {
        StatusTone::from_status(&self.status)
    }

    /// Reporter name shown on community cards
    pub fn author_name(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Anonymous")
    }
}

/// Parse a backend timestamp. Unparsable values are treated as absent.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Turn `in_progress` into `In Progress`.
pub fn status_label(status: &str) -> String {
    status
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Display tone for a report status.
///
/// Status is free text on the server; unknown values render as `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Resolved
    Success,
    /// Work in progress
    Warning,
    /// Awaiting triage
    Pending,
    Neutral,
}

impl StatusTone {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "resolved" => Self::Success,
            "in_progress" | "in progress" => Self::Warning,
            "pending" => Self::Pending,
            _ => Self::Neutral,
        }
    }
}

impl std::fmt::Display for StatusTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Pending => write!(f, "pending"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Input for submitting a report
#[derive(Debug, Clone, Default)]
pub struct CreateReportInput {
    pub issue_title: String,
    pub location: String,
    pub issue_description: String,
    /// Storage key returned by the presigned upload
    pub image_url: Option<String>,
    pub department: Option<String>,
    pub confidence_score: Option<f64>,
}

impl CreateReportInput {
    pub fn new(
        issue_title: impl Into<String>,
        location: impl Into<String>,
        issue_description: impl Into<String>,
    ) -> Self {
        Self {
            issue_title: issue_title.into(),
            location: location.into(),
            issue_description: issue_description.into(),
            ..Default::default()
        }
    }

    /// Multipart field list in the order the backend expects
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("issue_title", self.issue_title.clone()),
            ("location", self.location.clone()),
            ("issue_description", self.issue_description.clone()),
        ];
        if let Some(ref image_url) = self.image_url {
            fields.push(("image_url", image_url.clone()));
        }
        if let Some(ref department) = self.department {
            fields.push(("department", department.clone()));
        }
        if let Some(score) = self.confidence_score {
            fields.push(("confidence_score", score.to_string()));
        }
        fields
    }
}

/// Request body for `/reports/s3/presign/`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignRequest {
    pub file_name: String,
    pub content_type: String,
}

/// Presigned upload target
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresignResponse {
    /// Time-limited PUT URL
    pub url: String,
    /// Object key to store on the report
    pub key: String,
}

/// Presigned read URLs for a report's images
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresignGetResponse {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub completion_url: Option<String>,
}
