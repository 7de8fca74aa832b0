use contracts::dashboards::DashboardStats;

use crate::shared::api_utils::ApiContext;

pub async fn fetch_stats(ctx: &ApiContext) -> Result<DashboardStats, String> {
    ctx.get_json("/dashboard/stats").await
}
