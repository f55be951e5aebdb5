//! Support Issue Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Support ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    #[default]
    Open,
    /// Awaiting a reply from the other party
    Waiting,
    Closed,
}

impl IssueStatus {
    pub fn is_closed(self) -> bool {
        self == IssueStatus::Closed
    }
}

/// One entry in a ticket's append-only message history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueMessage {
    pub sender_role: Role,
    pub sender_id: i64,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Support ticket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportIssue {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub messages: Vec<IssueMessage>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreate {
    pub subject: String,
    pub description: String,
}

/// Reply payload (either party)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueReply {
    pub sender_role: Role,
    pub sender_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub text: String,
}
