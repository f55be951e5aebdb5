//! Admin endpoints
//!
//! Lifecycle mutations consult the guards in [`shared::lifecycle`] before
//! any network call; an illegal action fails locally and sends nothing. The
//! backend enforces the same rules authoritatively. After every successful
//! mutation callers should refetch their collection via
//! [`AdminApi::all_requests`]; the SDK never caches.

use chrono::NaiveDateTime;
use shared::lifecycle::{self, RequestAction};
use shared::models::{
    PickupPerson, PickupPersonCreate, PickupPersonUpdate, Principal, Request, User,
};

use crate::{ClientError, ClientResult, HttpClient};

/// Admin API group (`/api/admin`)
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    // ========== Users ==========

    /// List all registered users.
    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.http.get("api/admin/users").await
    }

    /// Mark a user account as verified.
    pub async fn verify_user(&self, id: i64) -> ClientResult<User> {
        self.http
            .put_empty(&format!("api/admin/user/verify/{id}"))
            .await
    }

    /// Revoke a user's verified flag.
    pub async fn reject_user(&self, id: i64) -> ClientResult<User> {
        self.http
            .put_empty(&format!("api/admin/user/reject/{id}"))
            .await
    }

    // ========== Requests ==========

    /// All pickup requests across all users.
    pub async fn all_requests(&self) -> ClientResult<Vec<Request>> {
        self.http.get("api/admin/requests/all").await
    }

    /// Approve a PENDING request.
    pub async fn approve_request(&self, request: &Request) -> ClientResult<Request> {
        lifecycle::check(RequestAction::Approve, request.status)?;
        self.http
            .put_empty(&format!("api/admin/request/approve/{}", request.id))
            .await
    }

    /// Reject a PENDING request. Terminal.
    pub async fn reject_request(&self, request: &Request) -> ClientResult<Request> {
        lifecycle::check(RequestAction::Reject, request.status)?;
        self.http
            .put_empty(&format!("api/admin/request/reject/{}", request.id))
            .await
    }

    /// Schedule an APPROVED request, assigning a pickup person and time.
    ///
    /// Both parameters are mandatory; missing input fails with a validation
    /// error before any network call. The server generates the pickup OTP.
    pub async fn schedule_request(
        &self,
        request: &Request,
        scheduled_time: Option<NaiveDateTime>,
        pickup_person_id: Option<i64>,
    ) -> ClientResult<Request> {
        lifecycle::check(RequestAction::Schedule, request.status)?;
        let payload = lifecycle::validate_schedule(scheduled_time, pickup_person_id)
            .map_err(|err| ClientError::Validation(err.to_string()))?;
        self.http
            .put(&format!("api/admin/request/schedule/{}", request.id), &payload)
            .await
    }

    /// Mark a SCHEDULED request as COMPLETED (admin override).
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
            .put_empty(&format!("api/admin/request/complete/{}", request.id))
            .await
    }

    // ========== Pickup persons ==========

    /// List all pickup persons.
    pub async fn pickup_persons(&self) -> ClientResult<Vec<PickupPerson>> {
        self.http.get("api/admin/pickuppersons").await
    }

    /// Provision a new pickup person.
    pub async fn add_pickup_person(
        &self,
        payload: &PickupPersonCreate,
    ) -> ClientResult<PickupPerson> {
        self.http.post("api/admin/pickuppersons", payload).await
    }

    /// Update a pickup person's details.
    pub async fn update_pickup_person(
        &self,
        id: i64,
        payload: &PickupPersonUpdate,
    ) -> ClientResult<PickupPerson> {
        self.http
            .put(&format!("api/admin/pickuppersons/{id}"), payload)
            .await
    }

    /// Remove a pickup person.
    pub async fn delete_pickup_person(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete(&format!("api/admin/pickuppersons/{id}"))
            .await
    }
}
