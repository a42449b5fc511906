//! Optimistic like/dislike tracking
//!
//! The visible state changes as soon as the user taps; the server's answer
//! then replaces it. If the request fails the state from before the tap is
//! put back.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::models::{ReactionKind, ReactionState, Report};

/// A reaction request failed and the previous state was restored
#[derive(Debug, thiserror::Error)]
#[error("Could not {kind} report {report_id}: {source}")]
pub struct ReactionError {
    pub report_id: i64,
    pub kind: ReactionKind,
    /// State now shown for the report
    pub restored: ReactionState,
    #[source]
    pub source: ApiError,
}

/// Per-report reaction state shared by the feed and detail views
pub struct ReactionTracker {
    client: Arc<ApiClient>,
    states: RwLock<HashMap<i64, ReactionState>>,
}

impl ReactionTracker {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            states: RwLock::new(HashMap::new()),
        }
    }

    /// Take counts and flags from a freshly loaded report
    pub async fn seed(&self, report: &Report) {
        self.states
            .write()
            .await
            .insert(report.id, ReactionState::from_report(report));
    }

    pub async fn seed_all<'a>(&self, reports: impl IntoIterator<Item = &'a Report>) {
        let mut states = self.states.write().await;
        for report in reports {
            states.insert(report.id, ReactionState::from_report(report));
        }
    }

    pub async fn state(&self, report_id: i64) -> Option<ReactionState> {
        self.states.read().await.get(&report_id).copied()
    }

    /// Apply a tap optimistically, then reconcile with the server.
    ///
    /// A tap while an earlier request for the same report is pending builds
    /// on the optimistic state.
    pub async fn toggle(
        &self,
        report_id: i64,
        kind: ReactionKind,
    ) -> Result<ReactionState, ReactionError> {
        let snapshot = {
            let mut states = self.states.write().await;
            let before = states.get(&report_id).copied().unwrap_or_default();
            states.insert(report_id, before.toggled(kind));
            before
        };
        tracing::debug!(report_id, %kind, "Applied optimistic reaction");

        match self.client.react(report_id, kind).await {
            Ok(response) => {
                let confirmed = ReactionState::from(&response);
                self.states.write().await.insert(report_id, confirmed);
                Ok(confirmed)
            }
            Err(source) => {
                tracing::warn!(report_id, %kind, error = %source, "Reaction failed, rolling back");
                self.states.write().await.insert(report_id, snapshot);
                Err(ReactionError {
                    report_id,
                    kind,
                    restored: snapshot,
                    source,
                })
            }
        }
    }
}
