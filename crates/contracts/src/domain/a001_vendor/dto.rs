use serde::{Deserialize, Serialize};

/// Vendor directory entry as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub company_name: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
