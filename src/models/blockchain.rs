//! On-chain audit trail of a report

use serde::{Deserialize, Serialize};

/// Response of `/blockchain/reports/{tracking_id}/status/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainStatus {
    pub tracking_id: String,
    pub blockchain_verified: bool,
    /// Set once the report has breached its resolution deadline
    pub sla_escalated: bool,
    #[serde(default)]
    pub latest_tx_hash: Option<String>,
    #[serde(default)]
    pub events: Option<Vec<BlockchainEvent>>,
    #[serde(default)]
    pub evidence: Option<Vec<BlockchainEvidence>>,
    #[serde(default)]
    pub sla_status: Option<SlaStatus>,
}

impl BlockchainStatus {
    pub fn events(&self) -> &[BlockchainEvent] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn evidence(&self) -> &[BlockchainEvidence] {
        self.evidence.as_deref().unwrap_or_default()
    }
}

/// Lifecycle event anchored on chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainEvent {
    pub event_type: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub block_number: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub explorer_url: Option<String>,
}

/// Hashed evidence file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainEvidence {
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_hash: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    pub verified: bool,
    /// Unix seconds
    #[serde(default)]
    pub block_timestamp: Option<i64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaStatus {
    pub within_sla: bool,
    pub days_elapsed: i64,
    pub days_remaining: i64,
}
