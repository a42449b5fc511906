//! Data models
//!
//! This module contains the data structures exchanged with the ReportMitra backend.
//! Models represent:
//! - API response entities (User, Report, Comment)
//! - Request payloads (login, registration, report submission, uploads)
//! - Identity verification, classification and on-chain audit records
//! - Client-side view state (reaction counts, status tones)

mod blockchain;
mod comment;
mod ml;
mod page;
mod reaction;
mod report;
mod user;

pub use blockchain::{BlockchainEvent, BlockchainEvidence, BlockchainStatus, SlaStatus};
pub use comment::{Comment, CreateCommentInput};
pub use ml::{
    MlPredictInput, MlPrediction, MlResult, MlTextResult, MANUAL_DEPARTMENT, MISMATCH_MESSAGE,
};
pub use page::Page;
pub use reaction::{ReactionKind, ReactionResponse, ReactionState};
pub use report::{
    parse_timestamp, status_label, CreateReportInput, PresignGetResponse, PresignRequest,
    PresignResponse, Report, StatusTone,
};
pub use user::{
    AadhaarData, AadhaarProfile, AuthResponse, AuthTokens, LoginInput, OtpRequestResponse,
    RegisterInput, TokenRefreshResponse, User, UserProfile, VerifyAadhaarInput,
    VerifyAadhaarResponse,
};
