use contracts::domain::a005_product::dto::{Product, ProductListParams};

use crate::shared::api_utils::{query_string, ApiContext};

pub async fn fetch_products(
    ctx: &ApiContext,
    params: &ProductListParams,
) -> Result<Vec<Product>, String> {
    ctx.get_json(&format!("/products{}", query_string(params)))
        .await
}
