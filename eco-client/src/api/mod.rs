//! Typed endpoint surface
//!
//! One API group per backend controller: auth (users), admin, pickup
//! persons, and support issues.

mod admin;
mod auth;
mod issues;
mod pickup;

pub use admin::AdminApi;
pub use auth::{AuthApi, PhotoUpload};
pub use issues::IssuesApi;
pub use pickup::PickupApi;

use crate::geocode::GeocodeClient;
use crate::{ClientConfig, HttpClient};

/// API client for the EcoSaathi backend
#[derive(Debug, Clone)]
pub struct EcoClient {
    http: HttpClient,
    geocode: GeocodeClient,
}

impl EcoClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            geocode: GeocodeClient::new(config),
        }
    }

    /// Auth and end-user endpoints
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    /// Admin endpoints
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(&self.http)
    }

    /// Pickup person endpoints
    pub fn pickup(&self) -> PickupApi<'_> {
        PickupApi::new(&self.http)
    }

    /// Support issue endpoints
    pub fn issues(&self) -> IssuesApi<'_> {
        IssuesApi::new(&self.http)
    }

    /// One-shot address geocoding
    pub fn geocode(&self) -> &GeocodeClient {
        &self.geocode
    }
}
