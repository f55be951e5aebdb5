//! Client-related types shared across the SDK
//!
//! Request/response payloads for API communication that do not belong to a
//! single entity model.

use serde::{Deserialize, Serialize};

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub pickup_address: Option<String>,
}

/// Login request (end users)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Email OTP verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Pickup person login credentials (sent as query parameters)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLoginRequest {
    pub email: String,
    pub password: String,
}

/// Generic message body, also the backend's error body shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
