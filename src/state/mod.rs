//! Query state (verb module)
//!
//! Accumulates field selections and derives the pivot query request from
//! them.

mod analytics;

pub use analytics::{AnalyticsState, derive_request};
