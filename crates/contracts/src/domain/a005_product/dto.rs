use serde::{Deserialize, Serialize};

use crate::domain::common::IdName;
use crate::enums::StockStatus;

/// Catalog product. Monetary fields are decimal-as-string, passed through
/// exactly as the backend serializes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub brand_id: String,
    #[serde(default)]
    pub brand: IdName,
    pub category_id: String,
    #[serde(default)]
    pub category: IdName,
    pub sku: String,
    pub image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub amount: String,
    pub discount: Option<String>,
    pub quantity: i64,
    pub stock_status: StockStatus,
    pub availability: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Server-side filters for `GET /products`; unset fields stay off the
/// query string.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
