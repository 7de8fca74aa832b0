use leptos::prelude::*;

use super::sidebar::Sidebar;
use super::sidebar_state::SidebarState;
use super::top_header::TopHeader;

/// Main application frame: sidebar on the left, header plus routed
/// content on the right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    provide_context(SidebarState::new());

    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <TopHeader />
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
