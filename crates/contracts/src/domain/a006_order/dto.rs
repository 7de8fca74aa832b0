use serde::{Deserialize, Serialize};

use crate::domain::common::PersonRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer: PersonRef,
    pub status: String,
    pub total_amount: String,
    pub created_at: String,
    pub updated_at: String,
}
