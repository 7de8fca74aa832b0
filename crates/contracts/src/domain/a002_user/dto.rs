use serde::{Deserialize, Serialize};

use crate::domain::common::{IdName, PersonRef};
use crate::enums::UserRole;

/// Account record shared by every role; role-specific detail hangs off the
/// optional profile blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: String,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub vendor: Option<IdName>,
    #[serde(default)]
    pub customer_profile: Option<CustomerProfile>,
    #[serde(default)]
    pub field_agent_profile: Option<FieldAgentProfile>,
}

impl BaseUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("—")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub id: String,
    #[serde(default)]
    pub mobile: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub google_map_link: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub field_agent_id: Option<String>,
    #[serde(default)]
    pub team_lead_id: Option<String>,
    #[serde(default)]
    pub field_agent: Option<PersonRef>,
    #[serde(default)]
    pub team_lead: Option<PersonRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAgentProfile {
    pub id: String,
    #[serde(default)]
    pub mobile: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub google_map_link: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update sent to `PUT /users/:id`; only set fields go on the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Payload for `POST /users`. Passwords travel only here, never back.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub role: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
}

/// One audit-trail entry shown on user and lead detail screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    #[serde(default)]
    pub vendor_id: Option<String>,
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub details: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub user: Option<PersonRef>,
}
