//! Eco Client - HTTP SDK for the EcoSaathi API
//!
//! Typed network calls to the EcoSaathi backend, a persisted session store
//! with role gates, and a cancellable live-location poller.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod http;
pub mod session;
pub mod tracker;

pub use api::EcoClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::SessionStore;
pub use tracker::{LocationPoller, Tracking};

// Re-export shared types for convenience
pub use shared::models::{Coordinates, Principal, Request, Role};
pub use shared::{RequestAction, RequestStatus, TransitionError};
