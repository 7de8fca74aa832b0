use leptos::prelude::*;

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="card card--empty">
            <p class="card--empty__text">{message}</p>
        </div>
    }
}
