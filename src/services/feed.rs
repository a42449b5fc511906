//! Community feed of resolved reports
//!
//! Pages are fetched with the server's `next` cursor and appended without
//! duplicates. Reaction counts from each page are handed to the shared
//! `ReactionTracker` when one is attached.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::models::Report;
use crate::services::reaction::ReactionTracker;

pub struct CommunityFeed {
    client: Arc<ApiClient>,
    reactions: Option<Arc<ReactionTracker>>,
    reports: Vec<Report>,
    next: Option<String>,
}

impl CommunityFeed {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            reactions: None,
            reports: Vec::new(),
            next: None,
        }
    }

    pub fn with_reactions(client: Arc<ApiClient>, reactions: Arc<ReactionTracker>) -> Self {
        Self {
            reactions: Some(reactions),
            ..Self::new(client)
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Fetch the first page unless something is already loaded
    pub async fn load_initial(&mut self) -> Result<usize, ApiError> {
        if !self.reports.is_empty() {
            return Ok(0);
        }
        self.refresh().await
    }

    /// Refetch the first page and replace everything
    pub async fn refresh(&mut self) -> Result<usize, ApiError> {
        let page = self.client.community_resolved(None).await?;
        self.seed_reactions(&page.results).await;

        let has_more = page.has_next();
        self.reports = page.results;
        self.next = page.next;
        tracing::debug!(count = self.reports.len(), has_more, "Feed refreshed");
        Ok(self.reports.len())
    }

    /// Append the next page. Returns how many new reports were added.
    pub async fn load_more(&mut self) -> Result<usize, ApiError> {
        let Some(cursor) = self.next.clone() else {
            return Ok(0);
        };

        let page = self.client.community_resolved(Some(&cursor)).await?;
        self.seed_reactions(&page.results).await;

        let has_more = page.has_next();
        let mut seen: HashSet<i64> = self.reports.iter().map(|r| r.id).collect();
        let before = self.reports.len();
        self.reports
            .extend(page.results.into_iter().filter(|r| seen.insert(r.id)));
        self.next = page.next;

        let added = self.reports.len() - before;
        tracing::debug!(added, has_more, "Feed page appended");
        Ok(added)
    }

    async fn seed_reactions(&self, reports: &[Report]) {
        if let Some(ref reactions) = self.reactions {
            reactions.seed_all(reports).await;
        }
    }
}
