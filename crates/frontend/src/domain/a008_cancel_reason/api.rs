use contracts::domain::a008_cancel_reason::dto::CancelReason;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_cancel_reasons(ctx: &ApiContext) -> Result<Vec<CancelReason>, String> {
    ctx.get_json("/cancel-reasons").await
}
