//! ReportMitra - civic issue reporting client
//!
//! This library provides the client side of the ReportMitra platform:
//! authenticated access to the REST backend, session handling, the
//! community feed with optimistic reactions, and report submission.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(test)]
mod test_support;
