use contracts::enums::UserRole;
use contracts::system::auth::AuthUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiContext;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AuthUser>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount. A token that no
    // longer passes /auth/me is discarded, which drops back to login.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                let ctx = ApiContext::for_window(Some(token.clone()));
                match api::get_current_user(&ctx).await {
                    Ok(user) => {
                        log::info!("session restored for {}", user.email);
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            user: Some(user),
                        });
                    }
                    Err(_) => storage::clear_token(),
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Explicit request context for the current session. Fetch functions take
/// this value; nothing below the component layer reads the token from
/// storage on its own.
pub fn use_api_context() -> ApiContext {
    let (auth_state, _) = use_auth();
    ApiContext::for_window(auth_state.get_untracked().token)
}

/// Role of the signed-in operator as a reactive signal; `Customer` until
/// the session is known.
pub fn current_role() -> Signal<UserRole> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || {
        auth_state
            .get()
            .user
            .map(|u| u.role)
            .unwrap_or(UserRole::Customer)
    })
}

/// Helper: Perform logout
pub fn do_logout() {
    let (auth_state, set_auth_state) = use_auth();
    let ctx = ApiContext::for_window(auth_state.get_untracked().token);
    spawn_local(async move {
        let _ = api::logout(&ctx).await;
    });
    storage::clear_token();
    set_auth_state.set(AuthState::default());
    log::info!("signed out");
}
