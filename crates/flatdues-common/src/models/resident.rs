use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::auth::Role;

/// A society member as listed in the admin roster. Created through the
/// register endpoint with role `resident`; read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub flat_number: String,
    pub role: Role,
}
