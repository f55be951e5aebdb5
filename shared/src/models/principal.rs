//! Principal and Role Model
//!
//! The authenticated identity for the current session. The role is resolved
//! exactly once at login into a tagged [`Role`] variant and carried
//! everywhere; nothing downstream re-derives it from strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{PickupPerson, User};

/// Session role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    PickupPerson,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::PickupPerson => write!(f, "PICKUP_PERSON"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Authenticated principal persisted for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: i64,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub verified: bool,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl Principal {
    /// Resolve a principal from a logged-in end user.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
            verified: user.verified,
            pickup_address: user.pickup_address.clone(),
            profile_image_url: user.profile_image_url.clone(),
        }
    }

    /// Resolve a principal from a logged-in pickup person.
    ///
    /// Agents are admin-provisioned, so they carry no verification flow.
    pub fn from_pickup_person(person: &PickupPerson) -> Self {
        Self {
            id: person.id,
            role: Role::PickupPerson,
            name: Some(person.name.clone()),
            email: person.email.clone().unwrap_or_default(),
            verified: true,
            pickup_address: None,
            profile_image_url: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_pickup_person(&self) -> bool {
        self.role == Role::PickupPerson
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&Role::PickupPerson).unwrap(),
            "\"PICKUP_PERSON\""
        );
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_principal_from_user_resolves_role_once() {
        let json = r#"{"id": 3, "email": "a@b.c", "role": "ADMIN", "verified": true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        let principal = Principal::from_user(&user);
        assert!(principal.is_admin());
        assert!(!principal.is_user());
        assert!(principal.is_verified());
    }
}
