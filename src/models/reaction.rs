//! Like/dislike state
//!
//! A report carries a like count, a dislike count and the current user's
//! flags. Like and dislike are mutually exclusive: choosing one clears the
//! other.

use serde::{Deserialize, Serialize};

use super::report::Report;

/// Which button was tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
        }
    }
}

/// Authoritative counts returned by `/reports/{id}/like/` and `/dislike/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReactionResponse {
    #[serde(alias = "likesCount")]
    pub likes_count: i64,
    #[serde(alias = "dislikesCount")]
    pub dislikes_count: i64,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub disliked: Option<bool>,
}

/// Counts and flags shown for one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionState {
    pub likes: i64,
    pub dislikes: i64,
    pub liked: bool,
    pub disliked: bool,
}

impl ReactionState {
    pub fn from_report(report: &Report) -> Self {
        Self {
            likes: report.likes_count.unwrap_or(0),
            dislikes: report.dislikes_count.unwrap_or(0),
            liked: report.is_liked.unwrap_or(false),
            disliked: report.is_disliked.unwrap_or(false),
        }
    }

    /// State after tapping `kind`, before the server answers.
    pub fn toggled(self, kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => self.toggle_like(),
            ReactionKind::Dislike => self.toggle_dislike(),
        }
    }

    fn toggle_like(mut self) -> Self {
        if self.liked {
            self.liked = false;
            self.likes = decrement(self.likes);
        } else {
            self.liked = true;
            self.likes += 1;
            if self.disliked {
                self.disliked = false;
                self.dislikes = decrement(self.dislikes);
            }
        }
        self
    }

    fn toggle_dislike(mut self) -> Self {
        if self.disliked {
            self.disliked = false;
            self.dislikes = decrement(self.dislikes);
        } else {
            self.disliked = true;
            self.dislikes += 1;
            if self.liked {
                self.liked = false;
                self.likes = decrement(self.likes);
            }
        }
        self
    }
}

impl From<&ReactionResponse> for ReactionState {
    fn from(response: &ReactionResponse) -> Self {
        Self {
            likes: response.likes_count,
            dislikes: response.dislikes_count,
            liked: response.liked.unwrap_or(false),
            disliked: response.disliked.unwrap_or(false),
        }
    }
}

fn decrement(count: i64) -> i64 {
    (count - 1).max(0)
}
