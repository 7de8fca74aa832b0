use contracts::system::auth::{AuthUser, LoginRequest, LoginResponse};

use crate::shared::api_utils::ApiContext;

/// Login with email and password. The context carries no token yet.
pub async fn login(ctx: &ApiContext, email: String, password: String) -> Result<LoginResponse, String> {
    ctx.post_json("/auth/login", &LoginRequest { email, password })
        .await
}

/// Fetch the signed-in operator; fails when the token no longer holds.
pub async fn get_current_user(ctx: &ApiContext) -> Result<AuthUser, String> {
    ctx.get_json("/auth/me").await
}

/// Ask the backend to drop the session's cookie twin. Local state is
/// cleared by the caller regardless of the outcome.
pub async fn logout(ctx: &ApiContext) -> Result<(), String> {
    ctx.post_no_content("/auth/logout", &serde_json::json!({}))
        .await
}
