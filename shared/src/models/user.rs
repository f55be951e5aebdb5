//! User Model

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// End customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Default address used when a request omits its own pickup location
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Self-service profile update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
