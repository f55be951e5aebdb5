//! Pickup Request Lifecycle
//!
//! The canonical status set, legal transitions, and the preconditions and
//! role permissions gating each transition. The backend enforces the same
//! graph authoritatively; these guards run before any network call so an
//! illegal action never leaves the client.
//!
//! ```text
//! PENDING -> APPROVED -> SCHEDULED -> COMPLETED
//!    |
//!    +-> REJECTED
//! ```
//!
//! `REJECTED` and `COMPLETED` are terminal; no status ever moves backwards.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::{Principal, Request, Role, ScheduleRequest};

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Scheduled,
    Completed,
    Rejected,
}

impl RequestStatus {
    /// Terminal statuses admit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Rejected)
    }

    /// Position along the forward path, used to forbid regressions.
    /// `Rejected` shares its rank with the terminal end of the graph.
    fn rank(self) -> u8 {
        match self {
            RequestStatus::Pending => 0,
            RequestStatus::Approved => 1,
            RequestStatus::Scheduled => 2,
            RequestStatus::Completed => 3,
            RequestStatus::Rejected => 3,
        }
    }

    /// Whether moving from `self` to `target` goes forward along the graph.
    pub fn precedes(self, target: RequestStatus) -> bool {
        !self.is_terminal() && self.rank() < target.rank()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Scheduled => "SCHEDULED",
            RequestStatus::Completed => "COMPLETED",
            RequestStatus::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

/// A lifecycle mutation an actor can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestAction {
    Approve,
    Reject,
    Schedule,
    Complete,
}

impl RequestAction {
    /// The only status this action is legal from.
    pub fn source(self) -> RequestStatus {
        match self {
            RequestAction::Approve | RequestAction::Reject => RequestStatus::Pending,
            RequestAction::Schedule => RequestStatus::Approved,
            RequestAction::Complete => RequestStatus::Scheduled,
        }
    }

    /// The status a successful action lands on.
    pub fn target(self) -> RequestStatus {
        match self {
            RequestAction::Approve => RequestStatus::Approved,
            RequestAction::Reject => RequestStatus::Rejected,
            RequestAction::Schedule => RequestStatus::Scheduled,
            RequestAction::Complete => RequestStatus::Completed,
        }
    }

    /// Whether `principal` may perform this action on `request`.
    ///
    /// Approve, reject and schedule are admin actions. Complete is for the
    /// assigned pickup person, with admin override.
    pub fn permitted_for(self, principal: &Principal, request: &Request) -> bool {
        match self {
            RequestAction::Approve | RequestAction::Reject | RequestAction::Schedule => {
                principal.role == Role::Admin
            }
            RequestAction::Complete => match principal.role {
                Role::Admin => true,
                Role::PickupPerson => request
                    .assigned_pickup_person
                    .as_ref()
                    .is_some_and(|person| person.id == principal.id),
                Role::User => false,
            },
        }
    }
}

impl fmt::Display for RequestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
            RequestAction::Schedule => "schedule",
            RequestAction::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Lifecycle guard failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The request is not in the status the action requires.
    #[error("cannot {action} a request in status {current}: expected {expected}")]
    InvalidTransition {
        action: RequestAction,
        current: RequestStatus,
        /// The attempted target status
        attempted: RequestStatus,
        expected: RequestStatus,
    },

    /// A parameter the action requires was not supplied.
    #[error("{field} is required to {action} a request")]
    MissingField {
        action: RequestAction,
        field: &'static str,
    },
}

/// Check that `action` is legal from `current`, without mutating anything.
///
/// Returns the target status on success so callers can render optimistically
/// while awaiting the authoritative refetch.
pub fn check(action: RequestAction, current: RequestStatus) -> Result<RequestStatus, TransitionError> {
    if current == action.source() {
        Ok(action.target())
    } else {
        Err(TransitionError::InvalidTransition {
            action,
            current,
            attempted: action.target(),
            expected: action.source(),
        })
    }
}

/// Validate schedule parameters before any network call.
///
/// Both the time and the pickup person are mandatory; the server assigns the
/// pickup OTP when it accepts the schedule.
pub fn validate_schedule(
    scheduled_time: Option<NaiveDateTime>,
    pickup_person_id: Option<i64>,
) -> Result<ScheduleRequest, TransitionError> {
    let scheduled_time = scheduled_time.ok_or(TransitionError::MissingField {
        action: RequestAction::Schedule,
        field: "scheduledTime",
    })?;
    let pickup_person_id = pickup_person_id.ok_or(TransitionError::MissingField {
        action: RequestAction::Schedule,
        field: "pickupPersonId",
    })?;
    Ok(ScheduleRequest {
        scheduled_time,
        pickup_person_id,
    })
}
