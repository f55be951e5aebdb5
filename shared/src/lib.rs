//! Shared types for the EcoSaathi client SDK
//!
//! Domain entities, the pickup-request lifecycle state machine, API payload
//! types, and dashboard aggregation helpers. Everything here is pure data and
//! pure functions; all I/O lives in the `eco-client` crate.

pub mod client;
pub mod lifecycle;
pub mod models;
pub mod report;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Lifecycle re-exports (for convenient access)
pub use lifecycle::{RequestAction, RequestStatus, TransitionError};
pub use models::{Principal, Role};
