use leptos::prelude::*;

use super::sidebar_state::SidebarState;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let state = use_context::<SidebarState>().expect("SidebarState not found in context");
    let (auth_state, _) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };
    let role_label = move || {
        auth_state
            .get()
            .user
            .map(|u| u.role.label())
            .unwrap_or("")
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__burger"
                    title="Toggle sidebar"
                    on:click=move |_| state.toggle()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Solar Services Console"</span>
            </div>
            <div class="top-header__right">
                <span class="top-header__user">
                    {icon("user")}
                    {user_name}
                </span>
                <Badge variant="neutral">{role_label}</Badge>
                <button
                    class="button button--secondary"
                    on:click=move |_| do_logout()
                >
                    {icon("logout")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
