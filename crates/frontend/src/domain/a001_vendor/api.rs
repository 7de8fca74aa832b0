use contracts::domain::a001_vendor::dto::Vendor;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_vendors(ctx: &ApiContext) -> Result<Vec<Vendor>, String> {
    ctx.get_json("/vendors").await
}

pub async fn delete_vendor(ctx: &ApiContext, id: &str) -> Result<(), String> {
    ctx.delete(&format!("/vendors/{}", urlencoding::encode(id)))
        .await
}
