//! Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::report::parse_timestamp;

/// Comment on a community report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub text: String,
    pub created_at: String,
}

impl Comment {
    /// Author name, "Anonymous" when the server sends none
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.username.as_deref())
            .unwrap_or("Anonymous")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Input for posting a comment
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentInput {
    pub text: String,
}
