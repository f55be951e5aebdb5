//! Support issue endpoints

use serde::Serialize;
use shared::models::{IssueCreate, IssueReply, Role, SupportIssue};

use crate::{ClientResult, HttpClient};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequesterQuery {
    requester_id: i64,
    role: Role,
}

/// Support issue API group (`/api/issues`)
#[derive(Debug, Clone, Copy)]
pub struct IssuesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> IssuesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Open a ticket as an end user.
    pub async fn create_for_user(
        &self,
        user_id: i64,
        payload: &IssueCreate,
    ) -> ClientResult<SupportIssue> {
        self.http
            .post(&format!("api/issues/create/user/{user_id}"), payload)
            .await
    }

    /// Open a ticket as a pickup person.
    pub async fn create_for_pickup(
        &self,
        pickup_person_id: i64,
        payload: &IssueCreate,
    ) -> ClientResult<SupportIssue> {
        self.http
            .post(&format!("api/issues/create/pickup/{pickup_person_id}"), payload)
            .await
    }

    /// Tickets opened by a user.
    pub async fn for_user(&self, user_id: i64) -> ClientResult<Vec<SupportIssue>> {
        self.http.get(&format!("api/issues/user/{user_id}")).await
    }

    /// Fetch one ticket with its message history. The backend checks that
    /// the requester may see it, so identity and role ride along as query
    /// parameters.
    pub async fn get(
        &self,
        issue_id: i64,
        requester_id: i64,
        role: Role,
    ) -> ClientResult<SupportIssue> {
        self.http
            .get_query(
                &format!("api/issues/{issue_id}"),
                &RequesterQuery { requester_id, role },
            )
            .await
    }

    /// Append a reply to a ticket's message history.
    pub async fn reply(&self, issue_id: i64, payload: &IssueReply) -> ClientResult<SupportIssue> {
        self.http
            .post(&format!("api/issues/{issue_id}/reply"), payload)
            .await
    }

    /// Close a ticket (admin).
    pub async fn close(&self, issue_id: i64) -> ClientResult<SupportIssue> {
        self.http
            .put_empty(&format!("api/issues/{issue_id}/close"))
            .await
    }

    /// All tickets across the system (admin).
    pub async fn all(&self) -> ClientResult<Vec<SupportIssue>> {
        self.http.get("api/issues/all").await
    }
}
