use contracts::domain::a007_quotation::dto::Quotation;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_quotations(ctx: &ApiContext) -> Result<Vec<Quotation>, String> {
    ctx.get_json("/quotations").await
}
