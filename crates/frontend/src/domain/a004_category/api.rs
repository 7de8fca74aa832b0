use contracts::domain::a004_category::dto::Category;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_categories(ctx: &ApiContext) -> Result<Vec<Category>, String> {
    ctx.get_json("/categories").await
}
