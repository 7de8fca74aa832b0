use contracts::domain::a002_user::dto::{ActivityLog, BaseUser, UserCreate, UserUpdate};

use crate::shared::api_utils::ApiContext;

pub async fn fetch_users(ctx: &ApiContext, role: Option<&str>) -> Result<Vec<BaseUser>, String> {
    match role {
        Some(role) => {
            ctx.get_json(&format!("/users?role={}", urlencoding::encode(role)))
                .await
        }
        None => ctx.get_json("/users").await,
    }
}

pub async fn fetch_user(ctx: &ApiContext, id: &str) -> Result<BaseUser, String> {
    ctx.get_json(&format!("/users/{}", urlencoding::encode(id)))
        .await
}

pub async fn create_user(ctx: &ApiContext, payload: &UserCreate) -> Result<BaseUser, String> {
    ctx.post_json("/users", payload).await
}

pub async fn update_user(
    ctx: &ApiContext,
    id: &str,
    update: &UserUpdate,
) -> Result<BaseUser, String> {
    ctx.put_json(&format!("/users/{}", urlencoding::encode(id)), update)
        .await
}

pub async fn delete_user(ctx: &ApiContext, id: &str) -> Result<(), String> {
    ctx.delete(&format!("/users/{}", urlencoding::encode(id)))
        .await
}

/// Audit trail for one entity, newest first.
pub async fn fetch_activity_logs(
    ctx: &ApiContext,
    entity_type: &str,
    entity_id: &str,
) -> Result<Vec<ActivityLog>, String> {
    ctx.get_json(&format!(
        "/activity-logs/{}/{}",
        urlencoding::encode(entity_type),
        urlencoding::encode(entity_id)
    ))
    .await
}
