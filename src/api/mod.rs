//! API layer - typed client for the ReportMitra REST backend
//!
//! This module contains everything that talks HTTP:
//! - `ApiClient` with bearer-token injection and 401 refresh/retry
//! - Account endpoints (login, register, OTP, profile)
//! - Report endpoints (submit, track, community feed, history)
//! - Reactions and comments
//! - Presigned image upload
//!
//! Endpoint methods are grouped by area in submodules as `impl ApiClient`
//! blocks; callers only need `ApiClient` and `ApiError`.

pub mod client;
pub mod endpoints;
pub mod error;
mod reports;
mod social;
mod upload;
mod users;


pub use client::{ApiClient, Auth};
pub use error::ApiError;
