use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card card--empty">
                <p class="card--empty__text">"Page not found."</p>
                <A href="/">"Back to dashboard"</A>
            </div>
        </div>
    }
}
