//! Pickup Request Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::lifecycle::RequestStatus;
use crate::models::{PickupPerson, User};

/// Maximum number of photos attached to a single request.
pub const MAX_REQUEST_PHOTOS: usize = 5;

/// E-waste pickup request entity
///
/// Timestamps are `NaiveDateTime` because the backend serializes them
/// without a timezone offset (e.g. `"2026-03-01T10:30:00"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: i64,
    /// Device category (e.g. "Laptop", "Refrigerator")
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Pickup address; defaults server-side to the user's registered address
    pub pickup_location: String,
    #[serde(default)]
    pub brand_model: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    /// One-time code generated by the server at scheduling time
    #[serde(default)]
    pub pickup_otp: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Set by the admin when the request is scheduled
    #[serde(default)]
    pub scheduled_time: Option<NaiveDateTime>,
    /// Requesting user (many-to-one)
    #[serde(default)]
    pub user: Option<User>,
    /// Assigned agent; `None` until the request is scheduled
    #[serde(default)]
    pub assigned_pickup_person: Option<PickupPerson>,
    #[serde(default)]
    pub pickup_person_assigned: bool,
}

impl Request {
    /// Whether a pickup person has been assigned to this request.
    pub fn is_assigned(&self) -> bool {
        self.assigned_pickup_person.is_some()
    }

    /// Assignment details, present only once the request is scheduled.
    pub fn assignment(&self) -> Option<(&PickupPerson, NaiveDateTime)> {
        match (&self.assigned_pickup_person, self.scheduled_time) {
            (Some(person), Some(time)) => Some((person, time)),
            _ => None,
        }
    }
}

/// Create request payload (sent alongside the photo upload)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreate {
    #[serde(rename = "type")]
    pub category: String,
    pub description: Option<String>,
    /// Empty means "use the user's registered pickup address"
    pub pickup_location: Option<String>,
    pub brand_model: Option<String>,
    pub condition: Option<String>,
    pub quantity: Option<i32>,
    pub remarks: Option<String>,
}

/// Schedule request payload (admin action body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub scheduled_time: NaiveDateTime,
    pub pickup_person_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::RequestStatus;

    #[test]
    fn test_request_deserialize_backend_shape() {
        let json = r#"{
            "id": 42,
            "type": "Laptop",
            "description": "Old office laptop",
            "pickupLocation": "221B Baker Street",
            "status": "SCHEDULED",
            "photoUrls": ["/images/a.jpg", "/images/b.jpg"],
            "pickupOtp": "4821",
            "createdAt": "2026-03-01T10:30:00",
            "scheduledTime": "2026-03-05T09:00:00",
            "assignedPickupPerson": {"id": 7, "name": "Ravi"},
            "pickupPersonAssigned": true
        }"#;

        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 42);
        assert_eq!(request.category, "Laptop");
        assert_eq!(request.status, RequestStatus::Scheduled);
        assert_eq!(request.photo_urls.len(), 2);
        assert_eq!(request.pickup_otp.as_deref(), Some("4821"));
        assert!(request.is_assigned());

        let (person, time) = request.assignment().unwrap();
        assert_eq!(person.id, 7);
        assert_eq!(time.to_string(), "2026-03-05 09:00:00");
    }

    #[test]
    fn test_request_assignment_absent_before_scheduling() {
        let json = r#"{"id": 1, "type": "TV", "pickupLocation": "somewhere", "status": "PENDING"}"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert!(!request.is_assigned());
        assert!(request.assignment().is_none());
        assert!(request.scheduled_time.is_none());
    }
}
