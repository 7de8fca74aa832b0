use contracts::domain::a006_order::dto::Order;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_orders(ctx: &ApiContext) -> Result<Vec<Order>, String> {
    ctx.get_json("/orders").await
}
