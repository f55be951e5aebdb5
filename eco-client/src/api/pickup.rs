//! Pickup person endpoints

use serde::Serialize;
use shared::client::PickupLoginRequest;
use shared::lifecycle::{self, RequestAction};
use shared::models::{Coordinates, PickupLocation, PickupPerson, Principal, Request};

use crate::{ClientError, ClientResult, HttpClient};

#[derive(Serialize)]
struct LocationQuery {
    latitude: f64,
    longitude: f64,
}

/// Pickup person API group (`/api/pickup`)
#[derive(Debug, Clone, Copy)]
pub struct PickupApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PickupApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Login as a pickup person, resolving a [`Principal`] with the
    /// pickup-person role.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Principal> {
        let credentials = PickupLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let person: PickupPerson = self
            .http
            .post_query("api/pickup/login", &credentials)
            .await?;
        Ok(Principal::from_pickup_person(&person))
    }

    /// Fetch a pickup person's profile.
    pub async fn person(&self, id: i64) -> ClientResult<PickupPerson> {
        self.http.get(&format!("api/pickup/{id}")).await
    }

    /// Requests currently assigned to this pickup person.
    pub async fn assigned_requests(&self, id: i64) -> ClientResult<Vec<Request>> {
        self.http.get(&format!("api/pickup/{id}/requests")).await
    }

    /// Mark a SCHEDULED request as COMPLETED.
    ///
    /// Only the assigned pickup person (or an admin) may complete; the guard
    /// runs before any network call.
    pub async fn complete_request(
        &self,
        principal: &Principal,
        request: &Request,
    ) -> ClientResult<Request> {
        if !RequestAction::Complete.permitted_for(principal, request) {
            return Err(ClientError::Forbidden(
                "only the assigned pickup person or an admin can complete a request".to_string(),
            ));
        }
        lifecycle::check(RequestAction::Complete, request.status)?;
        self.http
            .put_empty(&format!("api/pickup/request/complete/{}", request.id))
            .await
    }

    /// Report the pickup person's current live position.
    pub async fn update_location(
        &self,
        id: i64,
        position: Coordinates,
    ) -> ClientResult<PickupPerson> {
        self.http
            .put_query(
                &format!("api/pickup/location/update/{id}"),
                &LocationQuery {
                    latitude: position.latitude,
                    longitude: position.longitude,
                },
            )
            .await
    }

    /// Live position of the pickup person assigned to a request, polled by
    /// the requesting user's tracking view.
    pub async fn pickup_location(&self, request_id: i64) -> ClientResult<PickupLocation> {
        self.http
            .get(&format!("api/pickup/request/{request_id}/pickup-location"))
            .await
    }
}
