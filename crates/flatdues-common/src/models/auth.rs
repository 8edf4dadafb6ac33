use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, as issued by the auth service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Resident,
}

/// The authenticated user's session record: identity, role, and the bearer
/// token attached to every protected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_number: Option<String>,
    pub token: String,
}

impl Principal {
    /// A principal without a token must never be treated as authenticated.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account-creation payload. Admin self-signup and admin-created residents
/// share this contract; only the role (and flat number) differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_number: Option<String>,
}
