use contracts::domain::a003_brand::dto::Brand;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_brands(ctx: &ApiContext) -> Result<Vec<Brand>, String> {
    ctx.get_json("/brands").await
}
