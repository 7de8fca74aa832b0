use serde::{Deserialize, Serialize};

use crate::domain::common::{IdName, PersonRef};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    pub quotation_number: Option<String>,
    pub customer_id: String,
    #[serde(default)]
    pub customer: PersonRef,
    pub status: String,
    pub total_amount: String,
    pub notes: Option<String>,
    pub valid_until: Option<String>,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    pub id: String,
    #[serde(default)]
    pub product: IdName,
    pub quantity: i64,
    pub unit_price: String,
    pub total_price: String,
}
