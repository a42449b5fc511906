//! Services layer - client-side workflows
//!
//! This module contains the stateful services the front end drives.
//! Services are responsible for:
//! - Keeping session, feed and reaction state
//! - Coordinating API calls into user-level operations
//! - Validating input before it reaches the network

pub mod feed;
pub mod reaction;
pub mod report;
pub mod session;

pub use feed::CommunityFeed;
pub use reaction::{ReactionError, ReactionTracker};
pub use report::ReportService;
pub use session::{SessionService, SessionState};
